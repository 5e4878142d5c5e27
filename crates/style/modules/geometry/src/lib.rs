//! Box-model geometry: edge boxes, integer rectangles and the `NotARect` sentinel.
//!
//! `Edges` describes thicknesses (margin, padding, border widths) and never
//! coordinates. `Rect` is an axis-aligned pixel rectangle whose `right` and
//! `bottom` are always derived from its origin and size.
//!
//! Degenerate results (empty intersections, unions of rectangles that do not
//! share an edge pair, missing border strips) are represented as `None` in an
//! `Option<Rect>`; that `None` is the `NotARect` sentinel and is not an error.

#![forbid(unsafe_code)]

mod edges;
mod rect;
mod watched;

use core::convert::Infallible;

pub use edges::Edges;
pub use rect::{CutRegions, NOT_A_RECT, Rect};
pub use watched::{RectHook, WatchedRect};

/// Range and arity errors raised at the geometry boundary.
///
/// Values are never clamped; an invalid argument is reported to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A thickness, width or height was negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: i32 },
    /// Moving an edge would place it past the opposite edge.
    #[error("{edge} = {value} would cross the opposite edge at {opposite}")]
    Inverted {
        edge: &'static str,
        value: i32,
        opposite: i32,
    },
    /// An edge or extent would fall outside the `i32` coordinate range.
    #[error("{field} leaves the i32 range: {origin} offset by {extent}")]
    Overflow {
        field: &'static str,
        origin: i32,
        extent: i32,
    },
    /// A value list had an unsupported number of entries.
    #[error("expected {expected} values, got {got}")]
    Arity { expected: &'static str, got: usize },
}

impl From<Infallible> for GeometryError {
    #[inline]
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Reject negative values for the named field.
#[inline]
pub(crate) const fn non_negative(field: &'static str, value: i32) -> Result<i32, GeometryError> {
    if value < 0 {
        return Err(GeometryError::Negative { field, value });
    }
    Ok(value)
}
