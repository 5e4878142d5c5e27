use style_fill::{Fill, PlainFill};

use crate::BorderError;

/// One side of a border: a non-negative width painted with a plain fill.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderEdge {
    width: i32,
    fill: PlainFill,
}

impl BorderEdge {
    /// No width, transparent.
    pub const NONE: Self = Self {
        width: 0,
        fill: PlainFill::Transparent,
    };

    /// # Errors
    /// Returns `BorderError::NegativeWidth` for a negative width.
    pub fn new(width: i32, fill: impl Into<PlainFill>) -> Result<Self, BorderError> {
        if width < 0 {
            return Err(BorderError::NegativeWidth(width));
        }
        Ok(Self {
            width,
            fill: fill.into(),
        })
    }

    /// Build from an arbitrary fill, rejecting gradients and images.
    ///
    /// # Errors
    /// Returns `BorderError::Fill` wrapping `FillError::NotPlain`, or a width error.
    pub fn with_fill(width: i32, fill: Fill) -> Result<Self, BorderError> {
        Self::new(width, PlainFill::try_from(fill)?)
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn fill(&self) -> PlainFill {
        self.fill
    }

    /// # Errors
    /// Returns `BorderError::NegativeWidth` for a negative width.
    pub fn set_width(&mut self, width: i32) -> Result<(), BorderError> {
        if width < 0 {
            return Err(BorderError::NegativeWidth(width));
        }
        self.width = width;
        Ok(())
    }

    /// # Errors
    /// Returns `BorderError::Fill` when `fill` is not plain; the edge keeps its fill.
    pub fn set_fill(&mut self, fill: Fill) -> Result<(), BorderError> {
        self.fill = PlainFill::try_from(fill)?;
        Ok(())
    }

    /// Whether the edge paints anything.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.width > 0 && matches!(self.fill, PlainFill::Colour(_))
    }
}
