//! Selector text parsing.
//!
//! Grammar: a comma-separated list of complex selectors. A complex selector
//! is compounds joined by whitespace (any ancestor) or `>` (parent). A
//! compound is an optional type name followed by `.class` and `[attr]` /
//! `[attr=value]` tests, e.g. `Window > Panel Button.primary[kind="ok"]`.

use core::mem::take;

use log::debug;

use crate::{AttributeTest, Selector, SelectorError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// Simple tests collected for one compound before it becomes chain links.
#[derive(Debug, Default)]
struct Compound {
    type_name: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeTest>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    /// Links for this compound, innermost first: attributes, classes, type.
    fn build(self, context: Option<Selector>) -> Result<Selector, SelectorError> {
        let mut chain = context;
        if !self.attributes.is_empty() {
            chain = Some(Selector::has_attributes(self.attributes, chain)?);
        }
        if !self.classes.is_empty() {
            chain = Some(Selector::has_css_classes(self.classes, chain));
        }
        if let Some(name) = self.type_name {
            chain = Some(Selector::is_type(name, chain));
        }
        chain.ok_or(SelectorError::Empty)
    }
}

struct SelectorParser<'input> {
    input: &'input str,
    index: usize,
}

#[inline]
const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

impl<'input> SelectorParser<'input> {
    const fn new(input: &'input str) -> Self {
        Self { input, index: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.index).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    const fn error(&self, message: &'static str) -> SelectorError {
        SelectorError::Syntax {
            position: self.index,
            message,
        }
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn slice_from(&self, start: usize) -> &'input str {
        self.input.get(start..self.index).unwrap_or_default()
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.index;
        while self.peek().is_some_and(is_ident_byte) {
            self.bump();
        }
        if start == self.index {
            return Err(self.error("expected an identifier"));
        }
        Ok(self.slice_from(start).to_owned())
    }

    /// `[name]`, `[name=value]` or `[name="value"]`; the `[` is already consumed.
    fn attribute(&mut self) -> Result<AttributeTest, SelectorError> {
        self.skip_spaces();
        let name = self.ident()?;
        self.skip_spaces();
        let mut value = None;
        if self.peek() == Some(b'=') {
            self.bump();
            self.skip_spaces();
            value = Some(match self.peek() {
                Some(quote @ (b'"' | b'\'')) => {
                    self.bump();
                    let start = self.index;
                    while self.peek().is_some_and(|byte| byte != quote) {
                        self.bump();
                    }
                    if self.peek().is_none() {
                        return Err(self.error("unterminated quoted value"));
                    }
                    let quoted = self.slice_from(start).to_owned();
                    self.bump();
                    quoted
                }
                _ => self.ident()?,
            });
            self.skip_spaces();
        }
        if self.peek() != Some(b']') {
            return Err(self.error("expected `]`"));
        }
        self.bump();
        Ok(AttributeTest { name, value })
    }

    /// One complex selector, stopping before `,` or the end of input.
    fn complex(&mut self) -> Result<Selector, SelectorError> {
        let mut context: Option<Selector> = None;
        let mut compound = Compound::default();
        self.skip_spaces();
        loop {
            match self.peek() {
                None | Some(b',') => break,
                Some(b'.') => {
                    self.bump();
                    compound.classes.push(self.ident()?);
                }
                Some(b'[') => {
                    self.bump();
                    compound.attributes.push(self.attribute()?);
                }
                Some(byte) if is_ident_byte(byte) => {
                    if !compound.is_empty() {
                        return Err(self.error("type name must start a compound"));
                    }
                    compound.type_name = Some(self.ident()?);
                }
                Some(byte) if byte.is_ascii_whitespace() || byte == b'>' => {
                    self.skip_spaces();
                    let combinator = if self.peek() == Some(b'>') {
                        self.bump();
                        self.skip_spaces();
                        Combinator::Child
                    } else {
                        Combinator::Descendant
                    };
                    if matches!(self.peek(), None | Some(b',')) {
                        if combinator == Combinator::Child {
                            return Err(self.error("combinator without a right-hand selector"));
                        }
                        break;
                    }
                    if compound.is_empty() {
                        return Err(self.error("combinator without a left-hand selector"));
                    }
                    let left = take(&mut compound).build(context.take())?;
                    context = Some(match combinator {
                        Combinator::Descendant => Selector::child_of(Some(left)),
                        Combinator::Child => Selector::direct_child_of(Some(left)),
                    });
                }
                Some(_) => return Err(self.error("unexpected character")),
            }
        }
        if compound.is_empty() {
            return Err(SelectorError::Empty);
        }
        compound.build(context)
    }
}

/// Parse exactly one complex selector.
///
/// # Errors
/// Returns `SelectorError::Syntax` for malformed text, `SelectorError::Empty`
/// for blank input and `SelectorError::Conflict` for contradictory attributes.
pub fn parse_selector(input: &str) -> Result<Selector, SelectorError> {
    let mut parser = SelectorParser::new(input);
    let selector = parser.complex()?;
    if parser.peek().is_some() {
        return Err(parser.error("expected a single selector"));
    }
    Ok(selector)
}

/// Parse a comma-separated selector list.
///
/// # Errors
/// See [`parse_selector`]; an empty entry in the list is an error.
pub fn parse_selector_list(input: &str) -> Result<Vec<Selector>, SelectorError> {
    let mut parser = SelectorParser::new(input);
    let mut list = Vec::new();
    loop {
        list.push(parser.complex()?);
        if parser.peek() != Some(b',') {
            break;
        }
        parser.bump();
    }
    debug!(target: "style_selectors", "parsed {} selector(s) from {input:?}", list.len());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SelectorNode, Specificity};

    #[test]
    fn compound_builds_type_over_classes_over_attributes() -> Result<(), SelectorError> {
        let selector = parse_selector("Button.primary.wide[enabled]")?;
        let kinds: Vec<_> = selector
            .links()
            .map(|link| match link.node() {
                SelectorNode::Is(_) => "is",
                SelectorNode::HasCssClasses(_) => "classes",
                SelectorNode::HasAttributes(_) => "attributes",
                SelectorNode::ChildOf | SelectorNode::DirectChildOf => "ancestry",
            })
            .collect();
        assert_eq!(kinds, ["is", "classes", "attributes"]);
        assert_eq!(selector.specificity(), Specificity(0, 0, 3, 1));
        Ok(())
    }

    #[test]
    fn combinators_become_ancestry_links() -> Result<(), SelectorError> {
        let selector = parse_selector("Window > Panel  Button")?;
        let nodes: Vec<_> = selector.links().map(Selector::node).cloned().collect();
        assert_eq!(
            nodes,
            [
                SelectorNode::Is("Button".to_owned()),
                SelectorNode::ChildOf,
                SelectorNode::Is("Panel".to_owned()),
                SelectorNode::DirectChildOf,
                SelectorNode::Is("Window".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn quoted_attribute_values_keep_spaces() -> Result<(), SelectorError> {
        let selector = parse_selector("[title = \"Save as\"]")?;
        assert_eq!(
            selector.node(),
            &SelectorNode::HasAttributes([("title".to_owned(), Some("Save as".to_owned()))].into())
        );
        Ok(())
    }

    #[test]
    fn lists_split_on_commas() -> Result<(), SelectorError> {
        assert_eq!(parse_selector_list(" Label , .title ")?.len(), 2);
        Ok(())
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(parse_selector("   "), Err(SelectorError::Empty));
        assert_eq!(parse_selector_list("Label,"), Err(SelectorError::Empty));
        assert!(matches!(parse_selector("> Label"), Err(SelectorError::Syntax { .. })));
        assert!(matches!(parse_selector("Label >"), Err(SelectorError::Syntax { .. })));
        assert!(matches!(parse_selector(".x Label#id"), Err(SelectorError::Syntax { .. })));
        assert!(matches!(parse_selector("[open"), Err(SelectorError::Syntax { .. })));
        assert!(matches!(parse_selector("A, B"), Err(SelectorError::Syntax { .. })));
    }

    #[test]
    fn contradictory_attributes_are_a_conflict() {
        assert!(matches!(
            parse_selector("[kind=ok][kind=cancel]"),
            Err(SelectorError::Conflict { .. })
        ));
    }
}
