//! The fill union and its plain subset.

use style_face_buffer::FaceBuffer;
use style_geometry::Rect;

use crate::{Colour, FillError, Gradient, ImageFill, Tessellate};

/// How an image covers its target along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepeatMode {
    /// Scale the source region to the target extent.
    #[default]
    Stretch,
    /// Tile the source region at native size.
    Repeat,
}

/// Paint source for backgrounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fill {
    /// Paints nothing. Distinct from a colour with zero alpha.
    #[default]
    Transparent,
    Colour(Colour),
    Gradient(Gradient),
    Image(ImageFill),
}

impl Fill {
    /// Short variant name used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Colour(_) => "colour",
            Self::Gradient(_) => "gradient",
            Self::Image(_) => "image",
        }
    }

    pub const fn repeat_x(&self) -> RepeatMode {
        match self {
            Self::Image(image) => image.repeat_x(),
            Self::Transparent | Self::Colour(_) | Self::Gradient(_) => RepeatMode::Stretch,
        }
    }

    pub const fn repeat_y(&self) -> RepeatMode {
        match self {
            Self::Image(image) => image.repeat_y(),
            Self::Transparent | Self::Colour(_) | Self::Gradient(_) => RepeatMode::Stretch,
        }
    }

    /// Set the horizontal repeat mode.
    ///
    /// Images store it; solid fills look the same either way and ignore it.
    ///
    /// # Errors
    /// Returns `FillError::GradientRepeat` when asking a gradient to repeat.
    pub fn set_repeat_x(&mut self, mode: RepeatMode) -> Result<(), FillError> {
        match self {
            Self::Image(image) => image.set_repeat_x(mode),
            Self::Gradient(_) if mode == RepeatMode::Repeat => {
                return Err(FillError::GradientRepeat);
            }
            Self::Transparent | Self::Colour(_) | Self::Gradient(_) => {}
        }
        Ok(())
    }

    /// Set the vertical repeat mode. See [`Fill::set_repeat_x`].
    ///
    /// # Errors
    /// Returns `FillError::GradientRepeat` when asking a gradient to repeat.
    pub fn set_repeat_y(&mut self, mode: RepeatMode) -> Result<(), FillError> {
        match self {
            Self::Image(image) => image.set_repeat_y(mode),
            Self::Gradient(_) if mode == RepeatMode::Repeat => {
                return Err(FillError::GradientRepeat);
            }
            Self::Transparent | Self::Colour(_) | Self::Gradient(_) => {}
        }
        Ok(())
    }
}

impl Tessellate for Fill {
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        match self {
            Self::Transparent => {}
            Self::Colour(colour) => colour.geometry_for_rect(rect, buffer),
            Self::Gradient(gradient) => gradient.geometry_for_rect(rect, buffer),
            Self::Image(image) => image.geometry_for_rect(rect, buffer),
        }
    }
}

impl From<Colour> for Fill {
    #[inline]
    fn from(colour: Colour) -> Self {
        Self::Colour(colour)
    }
}

impl From<Gradient> for Fill {
    #[inline]
    fn from(gradient: Gradient) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<ImageFill> for Fill {
    #[inline]
    fn from(image: ImageFill) -> Self {
        Self::Image(image)
    }
}

/// The fills a border edge may use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PlainFill {
    #[default]
    Transparent,
    Colour(Colour),
}

impl PlainFill {
    #[inline]
    pub const fn colour(&self) -> Option<Colour> {
        match self {
            Self::Transparent => None,
            Self::Colour(colour) => Some(*colour),
        }
    }
}

impl Tessellate for PlainFill {
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer) {
        if let Self::Colour(colour) = self {
            colour.geometry_for_rect(rect, buffer);
        }
    }
}

impl From<Colour> for PlainFill {
    #[inline]
    fn from(colour: Colour) -> Self {
        Self::Colour(colour)
    }
}

impl From<PlainFill> for Fill {
    #[inline]
    fn from(plain: PlainFill) -> Self {
        match plain {
            PlainFill::Transparent => Self::Transparent,
            PlainFill::Colour(colour) => Self::Colour(colour),
        }
    }
}

impl TryFrom<Fill> for PlainFill {
    type Error = FillError;

    fn try_from(fill: Fill) -> Result<Self, Self::Error> {
        match &fill {
            Fill::Transparent => Ok(Self::Transparent),
            Fill::Colour(colour) => Ok(Self::Colour(*colour)),
            Fill::Gradient(_) | Fill::Image(_) => Err(FillError::NotPlain { kind: fill.kind() }),
        }
    }
}
