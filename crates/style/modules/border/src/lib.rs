//! Borders: four independently filled edges plus rounded-corner radii.
//!
//! Triangle output paints each edge strip and corner with plain fills (see
//! [`Border::geometry_for_rect`]). Radii are only stored and validated here;
//! the vector outline in [`outline`] is what carries them to a canvas backend.

#![forbid(unsafe_code)]

mod border;
mod edge;
pub mod outline;
mod radii;

pub use border::Border;
pub use edge::BorderEdge;
pub use outline::{BorderOutline, PathCommand, StrokedPath};
pub use radii::{Corner, CornerRadii};

use style_fill::FillError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BorderError {
    #[error("border width must be non-negative, got {0}")]
    NegativeWidth(i32),
    #[error("{corner:?} radius must be non-negative, got {value}")]
    NegativeRadius { corner: Corner, value: i32 },
    /// Border edges only take colours or transparency.
    #[error(transparent)]
    Fill(#[from] FillError),
}
