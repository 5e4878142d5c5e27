//! A persistent rectangle that reports every change to an owner-supplied hook.

use core::fmt;
use core::ops::Deref;

use crate::{Edges, GeometryError, Rect};

/// Callback fired synchronously after the watched rectangle changes.
pub type RectHook = Box<dyn FnMut(&Rect)>;

/// Rectangle held across frames (a widget's absolute rect) whose mutations
/// notify the owner so cached layout and geometry can be invalidated.
///
/// Reads go through `Deref<Target = Rect>`; writes go through the methods
/// below. The hook fires once per write that changes the stored value. Writes
/// that fail, or that store an equal rectangle, leave it silent.
#[derive(Default)]
pub struct WatchedRect {
    rect: Rect,
    on_change: Option<RectHook>,
}

impl WatchedRect {
    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            on_change: None,
        }
    }

    #[inline]
    pub fn with_hook(rect: Rect, hook: RectHook) -> Self {
        Self {
            rect,
            on_change: Some(hook),
        }
    }

    /// Install or replace the change hook.
    #[inline]
    pub fn set_hook(&mut self, hook: RectHook) {
        self.on_change = Some(hook);
    }

    #[inline]
    pub fn clear_hook(&mut self) -> Option<RectHook> {
        self.on_change.take()
    }

    #[inline]
    pub const fn get(&self) -> Rect {
        self.rect
    }

    /// Replace the whole rectangle.
    pub fn assign(&mut self, rect: Rect) {
        self.commit(rect);
    }

    /// # Errors
    /// Propagates [`Rect::set_x`]'s range error.
    pub fn set_x(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_x(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_y`]'s range error.
    pub fn set_y(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_y(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_width`]'s range error.
    pub fn set_width(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_width(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_height`]'s range error.
    pub fn set_height(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_height(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_left`]'s inversion error.
    pub fn set_left(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_left(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_top`]'s inversion error.
    pub fn set_top(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_top(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_right`]'s inversion error.
    pub fn set_right(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_right(value))
    }

    /// # Errors
    /// Propagates [`Rect::set_bottom`]'s inversion error.
    pub fn set_bottom(&mut self, value: i32) -> Result<(), GeometryError> {
        self.update(|current| current.set_bottom(value))
    }

    /// # Errors
    /// Propagates [`Rect::expand`]'s range error; nothing changes on failure.
    pub fn expand(&mut self, edges: &Edges) -> Result<(), GeometryError> {
        self.update(|current| current.expand(edges))
    }

    /// # Errors
    /// Propagates [`Rect::shrink`]'s range error; nothing changes on failure.
    pub fn shrink(&mut self, edges: &Edges) -> Result<(), GeometryError> {
        self.update(|current| current.shrink(edges))
    }

    /// Clip to `other`. Returns `false` and leaves the rectangle untouched
    /// when the intersection is `NotARect`.
    pub fn intersect_with(&mut self, other: &Rect) -> bool {
        match self.rect.intersection(other) {
            Some(clipped) => {
                self.commit(clipped);
                true
            }
            None => false,
        }
    }

    /// Apply `edit` to a copy and commit it on success.
    fn update<F>(&mut self, edit: F) -> Result<(), GeometryError>
    where
        F: FnOnce(&mut Rect) -> Result<(), GeometryError>,
    {
        let mut next = self.rect;
        edit(&mut next)?;
        self.commit(next);
        Ok(())
    }

    /// Store `next`, firing the hook only when it differs from the current
    /// value. Equal writes are skipped so cached geometry stays valid.
    fn commit(&mut self, next: Rect) {
        if next == self.rect {
            return;
        }
        self.rect = next;
        if let Some(hook) = self.on_change.as_mut() {
            hook(&self.rect);
        }
    }
}

impl Deref for WatchedRect {
    type Target = Rect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.rect
    }
}

impl fmt::Debug for WatchedRect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WatchedRect")
            .field("rect", &self.rect)
            .field("has_hook", &self.on_change.is_some())
            .finish()
    }
}

impl From<Rect> for WatchedRect {
    #[inline]
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}
