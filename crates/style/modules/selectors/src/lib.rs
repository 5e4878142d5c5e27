//! Widget selectors: chained predicates over type, classes, attributes and
//! ancestry, with CSS-style specificity.
//!
//! A selector is a chain of nodes. Each node tests one thing and hands the
//! rest of the chain either the same widget (type, class and attribute tests)
//! or one of its ancestors (`ChildOf`, `DirectChildOf`). Adjacent class or
//! attribute nodes are folded into one node when the chain is built, so the
//! specificity of `.x.y` is `(0, 0, 2, 0)` however it was constructed.

#![forbid(unsafe_code)]

mod matcher;
mod parser;
mod selector;
mod specificity;

pub use matcher::matches_selector_list;
pub use parser::{parse_selector, parse_selector_list};
pub use selector::{AttributeTest, Selector, SelectorNode};
pub use specificity::Specificity;

/// Tree access needed for matching. Implement this for your widget store.
pub trait WidgetAdapter {
    type Handle: Copy + Eq;

    /// Parent widget if any.
    fn parent(&self, widget: Self::Handle) -> Option<Self::Handle>;

    /// Widget type name, compared case-sensitively.
    fn type_name(&self, widget: Self::Handle) -> &str;

    /// True if the widget carries the class.
    fn has_class(&self, widget: Self::Handle, class: &str) -> bool;

    /// Attribute value if the attribute is present.
    fn attribute(&self, widget: Self::Handle, name: &str) -> Option<&str>;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Folding two attribute tests that demand different values.
    #[error("attribute `{name}` cannot equal both `{first}` and `{second}`")]
    Conflict {
        name: String,
        first: String,
        second: String,
    },
    #[error("selector syntax error at byte {position}: {message}")]
    Syntax {
        position: usize,
        message: &'static str,
    },
    #[error("empty selector")]
    Empty,
}
