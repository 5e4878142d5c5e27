use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::debug;
use style_cascade::{Rule, parse_stylesheet};
use style_fill::ResourceProvider;
use style_selectors::{Specificity, WidgetAdapter};

/// An ordered set of rules shared by every widget of a tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    rules: Vec<Rule>,
}

impl Theme {
    #[inline]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Build a theme from stylesheet text.
    ///
    /// # Errors
    /// Returns an error if the text fails to parse or names an unknown
    /// property.
    pub fn parse(text: &str, resources: &mut dyn ResourceProvider) -> Result<Self> {
        let rules = parse_stylesheet(text, resources).context("parsing theme stylesheet")?;
        Ok(Self::new(rules))
    }

    /// Read and parse a stylesheet file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path, resources: &mut dyn ResourceProvider) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading stylesheet {}", path.display()))?;
        let theme = Self::parse(&text, resources)
            .with_context(|| format!("loading theme from {}", path.display()))?;
        debug!(target: "style_theme", "loaded {} rules from {}", theme.rules.len(), path.display());
        Ok(theme)
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a rule after the existing ones; it wins ties against them.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Rules matching `widget`, least specific first. Ties keep theme order.
    pub fn matching_rules<A: WidgetAdapter>(&self, adapter: &A, widget: A::Handle) -> Vec<&Rule> {
        let mut matched: Vec<(Specificity, &Rule)> = self
            .rules
            .iter()
            .filter_map(|rule| Some((rule.matching_specificity(adapter, widget)?, rule)))
            .collect();
        matched.sort_by_key(|(specificity, _)| *specificity);
        matched.into_iter().map(|(_, rule)| rule).collect()
    }
}

impl Extend<Rule> for Theme {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_cascade::PropertyValue;
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

    /// A lone `Button.primary` with no parent.
    struct Lone;

    impl WidgetAdapter for Lone {
        type Handle = ();

        fn parent(&self, (): ()) -> Option<()> {
            None
        }

        fn type_name(&self, (): ()) -> &str {
            "Button"
        }

        fn has_class(&self, (): (), class: &str) -> bool {
            class == "primary"
        }

        fn attribute(&self, (): (), _name: &str) -> Option<&str> {
            None
        }
    }

    fn flex_of(rule: &Rule) -> Option<i32> {
        rule.declarations().iter().find_map(|declaration| match declaration.value() {
            PropertyValue::Flex(flex) => Some(*flex),
            _ => None,
        })
    }

    #[test]
    fn specificity_orders_before_position() -> Result<()> {
        let theme = Theme::parse(
            "Button.primary { flex: 3 }
             Button { flex: 1 }
             Label { flex: 9 }
             .primary { flex: 2 }",
            &mut NoImages,
        )?;
        let order: Vec<Option<i32>> =
            theme.matching_rules(&Lone, ()).into_iter().map(flex_of).collect();
        assert_eq!(order, [Some(1), Some(2), Some(3)]);
        Ok(())
    }

    #[test]
    fn equal_specificity_keeps_theme_order() -> Result<()> {
        let mut theme = Theme::parse("Button { flex: 4 } Button { flex: 5 }", &mut NoImages)?;
        theme.push(Rule::new(
            vec![style_selectors::parse_selector("Button")?],
            [("flex", "6")],
            &mut NoImages,
        )?);
        let order: Vec<Option<i32>> =
            theme.matching_rules(&Lone, ()).into_iter().map(flex_of).collect();
        assert_eq!(order, [Some(4), Some(5), Some(6)]);
        Ok(())
    }

    #[test]
    fn parse_errors_carry_context() {
        let error = Theme::parse("Button { flex: 0 }", &mut NoImages).err();
        let message = error.map(|error| format!("{error:#}")).unwrap_or_default();
        assert!(message.starts_with("parsing theme stylesheet"), "{message}");
    }
}
