//! Rules: selectors plus an ordered list of declarations.

use style_fill::ResourceProvider;
use style_selectors::{Selector, Specificity, WidgetAdapter};

use crate::{CascadeError, Declaration};

/// Declarations are applied in order; a rule without selectors is an inline
/// rule that applies only to the widget it is attached to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rule {
    selectors: Vec<Selector>,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Parse every `(name, value)` pair in order.
    ///
    /// # Errors
    /// Returns the first declaration error.
    pub fn new<'a, I>(
        selectors: Vec<Selector>,
        pairs: I,
        resources: &mut dyn ResourceProvider,
    ) -> Result<Self, CascadeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let declarations = pairs
            .into_iter()
            .map(|(name, value)| Declaration::from_pair(name, value, resources))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_declarations(selectors, declarations))
    }

    #[inline]
    pub const fn from_declarations(
        selectors: Vec<Selector>,
        declarations: Vec<Declaration>,
    ) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// A selector-less rule for one widget's own style.
    ///
    /// # Errors
    /// As [`Rule::new`].
    pub fn inline<'a, I>(
        pairs: I,
        resources: &mut dyn ResourceProvider,
    ) -> Result<Self, CascadeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(Vec::new(), pairs, resources)
    }

    #[inline]
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    #[inline]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Append a declaration after the existing ones.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Highest specificity among this rule's selectors that match `widget`,
    /// or `None` when none do. Inline rules never match through selectors.
    pub fn matching_specificity<A: WidgetAdapter>(
        &self,
        adapter: &A,
        widget: A::Handle,
    ) -> Option<Specificity> {
        self.selectors
            .iter()
            .filter(|selector| selector.is_match(adapter, widget))
            .map(Selector::specificity)
            .max()
    }
}
