//! Stylesheet text: `selector-list { name: value; ... }` blocks.
//!
//! Parsing happens in two passes. The `cssparser` rule machinery splits the
//! text into raw preludes and `(name, value)` pairs, then every pair goes
//! through [`Declaration::from_pair`](crate::Declaration::from_pair) and
//! every prelude through the selector parser. At-rules are not supported.

use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;
use log::debug;
use style_fill::ResourceProvider;
use style_selectors::parse_selector_list;

use crate::{CascadeError, Rule};

/// One `name: value` item before value parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDeclaration {
    /// Lowercased property name.
    pub name: String,
    /// Value text, trimmed.
    pub value: String,
}

/// One rule block before selector and value parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRule {
    /// Selector list text.
    pub prelude: String,
    /// Declarations in source order.
    pub declarations: Vec<RawDeclaration>,
}

fn syntax_error(error: &ParseError<'_, ()>) -> CascadeError {
    CascadeError::Syntax {
        line: error.location.line + 1,
        column: error.location.column,
    }
}

/// Records each declaration's name and raw value.
struct BodyDeclParser;

impl CssDeclarationParser<'_> for BodyDeclParser {
    type Declaration = RawDeclaration;
    type Error = ();

    fn parse_value<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(RawDeclaration {
            name: name.to_ascii_lowercase(),
            value: input.slice_from(start).trim().to_owned(),
        })
    }
}

impl CssAtRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type AtRule = RawDeclaration;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)))
    }
}

impl CssQualifiedRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type QualifiedRule = RawDeclaration;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, RawDeclaration, ()> for BodyDeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Builds a `RawRule` per qualified rule and rejects at-rules.
struct TopLevelParser;

impl CssAtRuleParser<'_> for TopLevelParser {
    type Prelude = ();
    type AtRule = RawRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::AtRuleInvalid(name)))
    }
}

impl CssQualifiedRuleParser<'_> for TopLevelParser {
    type Prelude = String;
    type QualifiedRule = RawRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let start = input.state();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(input.slice_from(start.position()).trim().to_owned())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        let mut body = BodyDeclParser;
        let declarations = CssRuleBodyParser::new(input, &mut body)
            .map(|item| item.map_err(|(error, _)| error))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RawRule {
            prelude,
            declarations,
        })
    }
}

/// Split stylesheet text into raw rules without interpreting them.
///
/// # Errors
/// Returns `CascadeError::Syntax` with the 1-based position of the first
/// malformed rule or declaration.
pub fn parse_raw(text: &str) -> Result<Vec<RawRule>, CascadeError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut top = TopLevelParser;
    StyleSheetParser::new(&mut parser, &mut top)
        .map(|rule| rule.map_err(|(error, _)| syntax_error(&error)))
        .collect()
}

/// Parse stylesheet text into rules in source order, resolving image URLs
/// through `resources`.
///
/// # Errors
/// Returns the syntax error of malformed text, otherwise the first selector
/// or declaration error.
pub fn parse_stylesheet(
    text: &str,
    resources: &mut dyn ResourceProvider,
) -> Result<Vec<Rule>, CascadeError> {
    let rules = parse_raw(text)?
        .iter()
        .map(|raw| {
            let selectors = parse_selector_list(&raw.prelude)?;
            let pairs = raw
                .declarations
                .iter()
                .map(|declaration| (declaration.name.as_str(), declaration.value.as_str()));
            Rule::new(selectors, pairs, resources)
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(target: "style_cascade", "parsed {} rules", rules.len());
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_fill::{FillError, ImageSource};

    struct NoImages;

    impl ResourceProvider for NoImages {
        fn require(&mut self, path: &str) -> Result<ImageSource, FillError> {
            Err(FillError::Resource {
                path: path.to_owned(),
                reason: "no images".to_owned(),
            })
        }
    }

    #[test]
    fn raw_rules_keep_source_order() -> Result<(), CascadeError> {
        let rules = parse_raw(
            "/* panels */ Panel.toolbar > Button { PADDING: 1 2 3 4; color: #fff }\nLabel{flex:2;}",
        )?;
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].prelude, "Panel.toolbar > Button");
        assert_eq!(
            rules[0].declarations,
            [
                RawDeclaration {
                    name: "padding".to_owned(),
                    value: "1 2 3 4".to_owned(),
                },
                RawDeclaration {
                    name: "color".to_owned(),
                    value: "#fff".to_owned(),
                },
            ]
        );
        assert_eq!(rules[1].prelude, "Label");
        Ok(())
    }

    #[test]
    fn missing_colon_reports_the_line() {
        let result = parse_raw("Button {\n  padding: 1;\n}\nLabel {\n  flex 2;\n}");
        assert!(matches!(result, Err(CascadeError::Syntax { line: 5, .. })));
    }

    #[test]
    fn at_rules_are_rejected() {
        assert!(matches!(
            parse_raw("@import url(base.css);"),
            Err(CascadeError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn rules_carry_every_selector() -> Result<(), CascadeError> {
        let rules = parse_stylesheet("Button, .primary { margin: 2 }", &mut NoImages)?;
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors().len(), 2);
        assert_eq!(rules[0].declarations().len(), 1);
        Ok(())
    }

    #[test]
    fn semantic_errors_surface_as_is() {
        assert_eq!(
            parse_stylesheet("Button { colour: red }", &mut NoImages),
            Err(CascadeError::UnknownProperty("colour".to_owned()))
        );
        assert!(matches!(
            parse_stylesheet("Button > { flex: 1 }", &mut NoImages),
            Err(CascadeError::Selector(_))
        ));
    }
}
