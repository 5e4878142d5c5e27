//! Paint sources: transparent, solid colour, gradient and image fills.
//!
//! Every fill knows how to tessellate itself into a [`FaceBuffer`] for a
//! target rectangle through the [`Tessellate`] trait. Border edges only accept
//! the plain subset ([`PlainFill`]).

#![forbid(unsafe_code)]

mod colour;
mod fill;
mod gradient;
mod image;

pub use colour::Colour;
pub use fill::{Fill, PlainFill, RepeatMode};
pub use gradient::{Gradient, GradientDirection, GradientStep};
pub use image::{ImageFill, ImageSource, ResourceProvider};

use style_face_buffer::FaceBuffer;
use style_geometry::{GeometryError, Rect};

/// Anything that can emit triangles covering a rectangle.
pub trait Tessellate {
    /// Append geometry covering `rect` to `buffer`.
    fn geometry_for_rect(&self, rect: &Rect, buffer: &mut FaceBuffer);
}

/// Errors raised when building or assigning fills.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FillError {
    /// A colour channel is outside its allowed range (or NaN).
    #[error("colour channel {channel} = {value} outside {range}")]
    ChannelRange {
        channel: &'static str,
        value: f32,
        range: &'static str,
    },
    /// A gradient step position is outside `[0, 1]`.
    #[error("gradient step position {0} outside [0, 1]")]
    StepPosition(f32),
    /// Gradients are always stretched.
    #[error("gradient fills cannot repeat")]
    GradientRepeat,
    /// A gradient or image was given where only a colour or transparency fits.
    #[error("{kind} fill is not a plain fill")]
    NotPlain { kind: &'static str },
    /// The image sub-rectangle has no area.
    #[error("image source rectangle is empty")]
    EmptySource,
    /// The image sub-rectangle maps outside the `[0, 1]` texture space.
    #[error("image source rectangle {rect:?} exceeds the {width}x{height} resource")]
    SourceOutOfBounds { rect: Rect, width: u32, height: u32 },
    /// A colour literal could not be parsed.
    #[error("unrecognised colour `{0}`")]
    UnknownColour(String),
    /// The resource provider could not supply an image.
    #[error("image resource `{path}` unavailable: {reason}")]
    Resource { path: String, reason: String },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
