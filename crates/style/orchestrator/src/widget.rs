use std::cell::Cell;
use std::rc::Rc;

use smallvec::SmallVec;
use style_cascade::{Rule, Style};
use style_face_buffer::FaceBuffer;
use style_geometry::{Rect, WatchedRect};

/// One node of a [`WidgetTree`](crate::WidgetTree): the selector-visible
/// identity plus cached style and geometry.
pub struct Widget {
    type_name: String,
    classes: SmallVec<String, 4>,
    attributes: SmallVec<(String, String), 4>,
    inline: Rule,
    pub(crate) rect: WatchedRect,
    /// Shared with the rect hook.
    pub(crate) geometry_dirty: Rc<Cell<bool>>,
    pub(crate) style_dirty: bool,
    pub(crate) style: Option<Style>,
    pub(crate) faces: FaceBuffer,
    pub(crate) content: Option<Rect>,
}

impl Widget {
    pub(crate) fn new(type_name: impl Into<String>) -> Self {
        let geometry_dirty = Rc::new(Cell::new(true));
        let hook_flag = Rc::clone(&geometry_dirty);
        Self {
            type_name: type_name.into(),
            classes: SmallVec::new(),
            attributes: SmallVec::new(),
            inline: Rule::default(),
            rect: WatchedRect::with_hook(
                Rect::default(),
                Box::new(move |_: &Rect| hook_flag.set(true)),
            ),
            geometry_dirty,
            style_dirty: true,
            style: None,
            faces: FaceBuffer::new(),
            content: None,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    pub const fn inline_rule(&self) -> &Rule {
        &self.inline
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    /// Last computed style, possibly stale.
    #[inline]
    pub const fn cached_style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    #[inline]
    pub const fn is_style_dirty(&self) -> bool {
        self.style_dirty
    }

    #[inline]
    pub fn is_geometry_dirty(&self) -> bool {
        self.geometry_dirty.get()
    }

    /// Returns `false` when the class was already present.
    pub(crate) fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_owned());
        true
    }

    /// Returns `false` when the class was absent.
    pub(crate) fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|candidate| candidate.as_str() != class);
        self.classes.len() != before
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Returns `false` when the attribute was absent.
    pub(crate) fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|entry| entry.0 != name);
        self.attributes.len() != before
    }

    pub(crate) fn set_inline(&mut self, rule: Rule) {
        self.inline = rule;
    }
}

impl core::fmt::Debug for Widget {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter
            .debug_struct("Widget")
            .field("type_name", &self.type_name)
            .field("classes", &self.classes)
            .field("attributes", &self.attributes)
            .field("rect", &self.rect.get())
            .field("style_dirty", &self.style_dirty)
            .field("geometry_dirty", &self.geometry_dirty.get())
            .finish_non_exhaustive()
    }
}
