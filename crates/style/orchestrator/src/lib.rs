//! Ties the style modules together around a widget tree.
//!
//! A [`WidgetTree`] owns its widgets in an arena, matches them against the
//! current [`Theme`] and caches each widget's computed [`Style`] and
//! tessellated [`FaceBuffer`] until a dirty flag says otherwise.

#![forbid(unsafe_code)]

mod config;
mod resources;
mod theme;
mod tree;
mod widget;

pub use config::EngineConfig;
pub use resources::ResourceRegistry;
pub use theme::Theme;
pub use tree::WidgetTree;
pub use widget::Widget;

pub use indextree::NodeId as WidgetId;
pub use style_border::{Border, BorderEdge, BorderOutline};
pub use style_cascade::{Declaration, Property, PropertyValue, Rule, Style};
pub use style_face_buffer::{FaceBatch, FaceBuffer, TextureId};
pub use style_fill::{Colour, Fill, ImageSource, ResourceProvider};
pub use style_geometry::{Edges, Rect};
