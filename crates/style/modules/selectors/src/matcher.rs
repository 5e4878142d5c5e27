//! Selector matching against a widget tree.

use crate::{Selector, SelectorNode, WidgetAdapter};

impl Selector {
    /// Match the chain against `widget`.
    ///
    /// Returns the widget on which the last link of the chain matched: the
    /// widget itself for a chain without ancestry tests, otherwise the
    /// ancestor that satisfied the innermost link. `ChildOf` tries ancestors
    /// nearest first and backtracks when the rest of the chain fails.
    pub fn matches<A: WidgetAdapter>(&self, adapter: &A, widget: A::Handle) -> Option<A::Handle> {
        match self.node() {
            SelectorNode::Is(name) => {
                if adapter.type_name(widget) != name.as_str() {
                    return None;
                }
                self.continue_on(adapter, widget)
            }
            SelectorNode::HasCssClasses(classes) => {
                if !classes.iter().all(|class| adapter.has_class(widget, class)) {
                    return None;
                }
                self.continue_on(adapter, widget)
            }
            SelectorNode::HasAttributes(tests) => {
                let passes = tests.iter().all(|(name, expected)| {
                    match (adapter.attribute(widget, name), expected) {
                        (None, _) => false,
                        (Some(_), None) => true,
                        (Some(actual), Some(value)) => actual == value.as_str(),
                    }
                });
                if !passes {
                    return None;
                }
                self.continue_on(adapter, widget)
            }
            SelectorNode::DirectChildOf => adapter
                .parent(widget)
                .and_then(|parent| self.continue_on(adapter, parent)),
            SelectorNode::ChildOf => {
                let mut ancestor = adapter.parent(widget);
                while let Some(candidate) = ancestor {
                    if let Some(found) = self.continue_on(adapter, candidate) {
                        return Some(found);
                    }
                    ancestor = adapter.parent(candidate);
                }
                None
            }
        }
    }

    /// Whether the chain matches `widget` at all.
    #[inline]
    pub fn is_match<A: WidgetAdapter>(&self, adapter: &A, widget: A::Handle) -> bool {
        self.matches(adapter, widget).is_some()
    }

    fn continue_on<A: WidgetAdapter>(&self, adapter: &A, widget: A::Handle) -> Option<A::Handle> {
        match self.chained() {
            Some(next) => next.matches(adapter, widget),
            None => Some(widget),
        }
    }
}

/// True if any selector in `list` matches `widget`.
pub fn matches_selector_list<A: WidgetAdapter>(
    adapter: &A,
    widget: A::Handle,
    list: &[Selector],
) -> bool {
    list.iter().any(|selector| selector.is_match(adapter, widget))
}
