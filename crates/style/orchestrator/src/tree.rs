//! Widget arena with lazily recomputed styles and geometry.

use std::iter;

use anyhow::{Context as _, Result, anyhow};
use indextree::{Arena, NodeId};
use log::{debug, trace};
use style_border::BorderOutline;
use style_cascade::{Rule, Style};
use style_face_buffer::FaceBuffer;
use style_fill::ResourceProvider;
use style_geometry::{Rect, WatchedRect};
use style_selectors::WidgetAdapter;
use tracing::info_span;

use crate::{EngineConfig, Theme, Widget};

/// Owns every widget and the theme they are styled by.
///
/// Writes only mark state dirty; styles and face buffers are rebuilt on the
/// next read. Changing a widget's classes, attributes or inline style
/// invalidates its subtree's styles since descendant selectors can depend on
/// them. Moving or resizing a widget invalidates only its own geometry.
#[derive(Debug)]
pub struct WidgetTree {
    arena: Arena<Widget>,
    theme: Theme,
    config: EngineConfig,
}

impl Default for WidgetTree {
    #[inline]
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl WidgetTree {
    #[inline]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_theme(config, Theme::default())
    }

    #[inline]
    pub fn with_theme(config: EngineConfig, theme: Theme) -> Self {
        Self {
            arena: Arena::new(),
            theme,
            config,
        }
    }

    #[inline]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme and invalidate every widget.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for node in self.arena.iter_mut().filter(|node| !node.is_removed()) {
            mark_dirty(node.get_mut());
        }
        debug!(target: "style_tree", "theme replaced ({} rules)", self.theme.rules().len());
    }

    /// Create a parentless widget.
    pub fn add_root(&mut self, type_name: impl Into<String>) -> NodeId {
        self.arena.new_node(Widget::new(type_name))
    }

    /// Create a widget as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` is not a live widget of this tree.
    pub fn add_child(&mut self, parent: NodeId, type_name: impl Into<String>) -> Result<NodeId> {
        self.node(parent)?;
        let child = self.arena.new_node(Widget::new(type_name));
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|error| anyhow!("attaching widget to {parent}: {error}"))?;
        Ok(child)
    }

    /// Remove `id` and its descendants.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        self.node(id)?;
        id.remove_subtree(&mut self.arena);
        Ok(())
    }

    /// Live widget at `id`.
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        self.arena
            .get(id)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent()
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn node(&self, id: NodeId) -> Result<&Widget> {
        self.widget(id).ok_or_else(|| anyhow!("unknown widget {id}"))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Widget> {
        self.arena
            .get_mut(id)
            .filter(|node| !node.is_removed())
            .map(indextree::Node::get_mut)
            .ok_or_else(|| anyhow!("unknown widget {id}"))
    }

    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        if self.node_mut(id)?.add_class(class) {
            self.invalidate_style(id);
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        if self.node_mut(id)?.remove_class(class) {
            self.invalidate_style(id);
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(id)?.set_attribute(name, value);
        self.invalidate_style(id);
        Ok(())
    }

    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<()> {
        if self.node_mut(id)?.remove_attribute(name) {
            self.invalidate_style(id);
        }
        Ok(())
    }

    /// Replace the widget's inline rule. It applies after every theme rule.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn set_inline_rule(&mut self, id: NodeId, rule: Rule) -> Result<()> {
        self.node_mut(id)?.set_inline(rule);
        self.invalidate_style(id);
        Ok(())
    }

    /// Parse `(name, value)` pairs into the widget's inline rule.
    ///
    /// # Errors
    /// Returns an error if a pair fails to parse or `id` is not a live widget.
    pub fn set_inline_style<'a, I>(
        &mut self,
        id: NodeId,
        pairs: I,
        resources: &mut dyn ResourceProvider,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rule = Rule::inline(pairs, resources)
            .with_context(|| format!("inline style of widget {id}"))?;
        self.set_inline_rule(id, rule)
    }

    /// Move or resize the widget. Only its geometry is invalidated.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> Result<()> {
        self.node_mut(id)?.rect.assign(rect);
        Ok(())
    }

    /// Direct access to the widget's watched rect; any change through it
    /// invalidates the widget's geometry.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live widget.
    pub fn rect_mut(&mut self, id: NodeId) -> Result<&mut WatchedRect> {
        Ok(&mut self.node_mut(id)?.rect)
    }

    /// Mark `id` and every descendant for style recomputation.
    pub fn invalidate_style(&mut self, id: NodeId) {
        if self.widget(id).is_none() {
            return;
        }
        let subtree: Vec<NodeId> = id.descendants(&self.arena).collect();
        for widget in &subtree {
            if let Some(node) = self.arena.get_mut(*widget) {
                mark_dirty(node.get_mut());
            }
        }
        trace!(target: "style_tree", "invalidated {} widgets under {id}", subtree.len());
    }

    /// Current style of `id`, recomputing it and any dirty ancestors first.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live widget or a rule cannot be
    /// applied to the widget.
    pub fn computed_style(&mut self, id: NodeId) -> Result<&Style> {
        self.ensure_style(id)?;
        self.node(id)?
            .style
            .as_ref()
            .ok_or_else(|| anyhow!("style of widget {id} was not computed"))
    }

    fn root_style(&self) -> Style {
        let mut style = Style::default();
        style.set_text_colour(self.config.default_text_colour());
        style
    }

    fn ensure_style(&mut self, id: NodeId) -> Result<()> {
        let widget = self.node(id)?;
        if !widget.style_dirty && widget.style.is_some() {
            return Ok(());
        }
        let base = match self.parent(id) {
            Some(parent) => {
                self.ensure_style(parent)?;
                self.node(parent)?
                    .style
                    .as_ref()
                    .map_or_else(|| self.root_style(), Style::inherited_from)
            }
            None => self.root_style(),
        };

        let _span = info_span!("style.recompute").entered();
        let rules = self.theme.matching_rules(&*self, id);
        let matched = rules.len();
        let inline = self.node(id)?.inline_rule();
        let style = base
            .cascade(rules.into_iter().chain(iter::once(inline)))
            .with_context(|| format!("cascading style of widget {id}"))?;
        trace!(target: "style_tree", "recomputed widget {id} from {matched} rules");

        let widget = self.node_mut(id)?;
        if widget.style.as_ref() != Some(&style) {
            widget.geometry_dirty.set(true);
        }
        widget.style = Some(style);
        widget.style_dirty = false;
        Ok(())
    }

    /// Face buffer for the widget's current rect and style, rebuilt when
    /// either changed since the last call.
    ///
    /// # Errors
    /// As [`WidgetTree::computed_style`].
    pub fn render(&mut self, id: NodeId) -> Result<&FaceBuffer> {
        let _span = info_span!("style.render").entered();
        self.ensure_style(id)?;
        let widget = self.node_mut(id)?;
        if widget.geometry_dirty.get() {
            let rect = widget.rect.get();
            let style = widget
                .style
                .as_ref()
                .ok_or_else(|| anyhow!("style of widget {id} was not computed"))?;
            widget.faces.clear();
            widget.content = style.geometry_for_rect(&rect, &mut widget.faces);
            widget.geometry_dirty.set(false);
            trace!(
                target: "style_tree",
                "tessellated widget {id}: {} triangles",
                widget.faces.triangle_count()
            );
        }
        Ok(&widget.faces)
    }

    /// Content rect (inside border and padding) of the last render, or `None`
    /// when border and padding leave no room.
    ///
    /// # Errors
    /// As [`WidgetTree::render`].
    pub fn content_rect(&mut self, id: NodeId) -> Result<Option<Rect>> {
        self.render(id)?;
        Ok(self.node(id)?.content)
    }

    /// Border outline of the widget at its current rect, for backends that
    /// draw paths instead of triangles.
    ///
    /// # Errors
    /// As [`WidgetTree::computed_style`].
    pub fn outline(&mut self, id: NodeId) -> Result<BorderOutline> {
        let rect = self.node(id)?.rect();
        Ok(self.computed_style(id)?.outline(&rect))
    }

    /// Render `root` and its descendants in tree order into one buffer.
    ///
    /// # Errors
    /// Returns the first widget's render error.
    pub fn render_subtree(&mut self, root: NodeId) -> Result<FaceBuffer> {
        let order: Vec<NodeId> = root.descendants(&self.arena).collect();
        let mut merged = FaceBuffer::new();
        for id in order {
            merged.extend_from(self.render(id)?);
        }
        Ok(merged)
    }
}

fn mark_dirty(widget: &mut Widget) {
    widget.style_dirty = true;
    widget.geometry_dirty.set(true);
}

impl WidgetAdapter for WidgetTree {
    type Handle = NodeId;

    fn parent(&self, widget: NodeId) -> Option<NodeId> {
        self.arena.get(widget)?.parent()
    }

    fn type_name(&self, widget: NodeId) -> &str {
        self.widget(widget).map_or("", Widget::type_name)
    }

    fn has_class(&self, widget: NodeId, class: &str) -> bool {
        self.widget(widget).is_some_and(|node| node.has_class(class))
    }

    fn attribute(&self, widget: NodeId, name: &str) -> Option<&str> {
        self.widget(widget)?.attribute(name)
    }
}
