//! Selector chain construction and normalization.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use crate::{SelectorError, Specificity};

/// `[name]` when `value` is `None`, `[name=value]` otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeTest {
    pub name: String,
    pub value: Option<String>,
}

impl AttributeTest {
    pub fn present(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectorNode {
    /// Widget type name equals.
    Is(String),
    /// The rest of the chain matches some ancestor.
    ChildOf,
    /// The rest of the chain matches the parent.
    DirectChildOf,
    /// Widget has every class in the set.
    HasCssClasses(BTreeSet<String>),
    /// Widget passes every attribute test, keyed by attribute name.
    HasAttributes(BTreeMap<String, Option<String>>),
}

impl SelectorNode {
    fn specificity(&self) -> Specificity {
        match self {
            Self::Is(_) | Self::ChildOf | Self::DirectChildOf => Specificity::TYPE,
            Self::HasCssClasses(classes) => Specificity::classes(classes.len()),
            Self::HasAttributes(tests) => Specificity::classes(tests.len()),
        }
    }
}

/// One node of a selector chain plus the predecessor it hands off to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    node: SelectorNode,
    chained: Option<Box<Selector>>,
}

impl Selector {
    pub fn is_type(name: impl Into<String>, chained: Option<Self>) -> Self {
        Self {
            node: SelectorNode::Is(name.into()),
            chained: chained.map(Box::new),
        }
    }

    /// Matches when `chained` matches any ancestor.
    pub fn child_of(chained: Option<Self>) -> Self {
        Self {
            node: SelectorNode::ChildOf,
            chained: chained.map(Box::new),
        }
    }

    /// Matches when `chained` matches the parent.
    pub fn direct_child_of(chained: Option<Self>) -> Self {
        Self {
            node: SelectorNode::DirectChildOf,
            chained: chained.map(Box::new),
        }
    }

    /// Class test, folded into `chained` when that is a class test too.
    pub fn has_css_classes<I, S>(classes: I, chained: Option<Self>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (mut set, chained) = match chained {
            Some(Self {
                node: SelectorNode::HasCssClasses(existing),
                chained,
            }) => (existing, chained),
            other => (BTreeSet::new(), other.map(Box::new)),
        };
        set.extend(classes.into_iter().map(Into::into));
        Self {
            node: SelectorNode::HasCssClasses(set),
            chained,
        }
    }

    /// Attribute test, folded into `chained` when that is an attribute test too.
    ///
    /// A presence test and a value test on one name fold into the value test.
    ///
    /// # Errors
    /// Returns `SelectorError::Conflict` when two tests require different
    /// values for the same attribute.
    pub fn has_attributes<I>(tests: I, chained: Option<Self>) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = AttributeTest>,
    {
        let (mut map, chained) = match chained {
            Some(Self {
                node: SelectorNode::HasAttributes(existing),
                chained,
            }) => (existing, chained),
            other => (BTreeMap::new(), other.map(Box::new)),
        };
        for test in tests {
            merge_attribute(&mut map, test)?;
        }
        Ok(Self {
            node: SelectorNode::HasAttributes(map),
            chained,
        })
    }

    #[inline]
    pub const fn node(&self) -> &SelectorNode {
        &self.node
    }

    #[inline]
    pub fn chained(&self) -> Option<&Self> {
        self.chained.as_deref()
    }

    /// This node followed by every chained predecessor.
    pub fn links(&self) -> impl Iterator<Item = &Self> {
        core::iter::successors(Some(self), |link| link.chained())
    }

    /// Sum of every link's contribution.
    pub fn specificity(&self) -> Specificity {
        self.links()
            .map(|link| link.node.specificity())
            .fold(Specificity::ZERO, |total, next| total + next)
    }
}

fn merge_attribute(
    map: &mut BTreeMap<String, Option<String>>,
    test: AttributeTest,
) -> Result<(), SelectorError> {
    match map.entry(test.name) {
        Entry::Vacant(slot) => {
            slot.insert(test.value);
        }
        Entry::Occupied(mut slot) => {
            let Some(second) = test.value else {
                return Ok(());
            };
            match slot.get() {
                None => {
                    slot.insert(Some(second));
                }
                Some(first) if *first == second => {}
                Some(first) => {
                    return Err(SelectorError::Conflict {
                        name: slot.key().clone(),
                        first: first.clone(),
                        second,
                    });
                }
            }
        }
    }
    Ok(())
}
