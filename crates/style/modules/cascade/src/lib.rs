//! Style cascade: the closed property table, value parsing, rules and the
//! computed `Style` they fold into.
//!
//! Values are written in a CSS-like syntax and tokenized with `cssparser`.
//! Four-value boxes (`padding`, `margin`, `border-radius`) list their sides
//! left, top, right, bottom, the same order `Edges::new` takes.

#![forbid(unsafe_code)]

mod declaration;
mod property;
mod rule;
mod style;
pub mod stylesheet;
mod values;

pub use declaration::{Declaration, PropertyValue};
pub use property::{Property, Side};
pub use rule::Rule;
pub use style::Style;
pub use stylesheet::parse_stylesheet;

use style_border::BorderError;
use style_fill::FillError;
use style_geometry::GeometryError;
use style_selectors::SelectorError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CascadeError {
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
    #[error("invalid value `{value}` for `{property}`: {reason}")]
    InvalidValue {
        property: &'static str,
        value: String,
        reason: String,
    },
    #[error("{property} must be {requirement}, got {value}")]
    OutOfRange {
        property: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("stylesheet syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Fill(#[from] FillError),
    #[error(transparent)]
    Border(#[from] BorderError),
    #[error(transparent)]
    Selector(#[from] SelectorError),
}
