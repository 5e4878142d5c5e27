use style_selectors::{
    AttributeTest, Selector, SelectorError, WidgetAdapter, matches_selector_list, parse_selector,
    parse_selector_list,
};

struct Node {
    parent: Option<usize>,
    type_name: &'static str,
    classes: &'static [&'static str],
    attributes: &'static [(&'static str, &'static str)],
}

struct Tree(Vec<Node>);

impl WidgetAdapter for Tree {
    type Handle = usize;

    fn parent(&self, widget: usize) -> Option<usize> {
        self.0.get(widget).and_then(|node| node.parent)
    }

    fn type_name(&self, widget: usize) -> &str {
        self.0.get(widget).map_or("", |node| node.type_name)
    }

    fn has_class(&self, widget: usize, class: &str) -> bool {
        self.0
            .get(widget)
            .is_some_and(|node| node.classes.iter().any(|candidate| *candidate == class))
    }

    fn attribute(&self, widget: usize, name: &str) -> Option<&str> {
        self.0.get(widget).and_then(|node| {
            node.attributes
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
        })
    }
}

const WINDOW: usize = 0;
const OUTER: usize = 1;
const INNER: usize = 2;
const BUTTON: usize = 3;

/// Window > Panel.toolbar > Panel > Button.primary[kind=ok][enabled]
fn tree() -> Tree {
    Tree(vec![
        Node {
            parent: None,
            type_name: "Window",
            classes: &[],
            attributes: &[],
        },
        Node {
            parent: Some(WINDOW),
            type_name: "Panel",
            classes: &["toolbar"],
            attributes: &[],
        },
        Node {
            parent: Some(OUTER),
            type_name: "Panel",
            classes: &[],
            attributes: &[],
        },
        Node {
            parent: Some(INNER),
            type_name: "Button",
            classes: &["primary", "wide"],
            attributes: &[("kind", "ok"), ("enabled", "")],
        },
    ])
}

#[test]
fn simple_tests_return_the_widget_itself() -> Result<(), SelectorError> {
    let tree = tree();
    assert_eq!(Selector::is_type("Button", None).matches(&tree, BUTTON), Some(BUTTON));
    assert_eq!(Selector::is_type("Label", None).matches(&tree, BUTTON), None);
    let primary = Selector::has_css_classes(["primary"], None);
    assert_eq!(primary.matches(&tree, BUTTON), Some(BUTTON));
    let missing = Selector::has_css_classes(["primary", "danger"], None);
    assert_eq!(missing.matches(&tree, BUTTON), None);
    let enabled = Selector::has_attributes(
        [AttributeTest::present("enabled"), AttributeTest::equals("kind", "ok")],
        None,
    )?;
    assert_eq!(enabled.matches(&tree, BUTTON), Some(BUTTON));
    let wrong_kind = Selector::has_attributes([AttributeTest::equals("kind", "cancel")], None)?;
    assert_eq!(wrong_kind.matches(&tree, BUTTON), None);
    Ok(())
}

#[test]
fn ancestry_returns_the_matching_ancestor() {
    let tree = tree();
    let in_window = Selector::is_type(
        "Button",
        Some(Selector::child_of(Some(Selector::is_type("Window", None)))),
    );
    assert_eq!(in_window.matches(&tree, BUTTON), Some(WINDOW));

    let direct = Selector::direct_child_of(Some(Selector::is_type("Window", None)));
    assert_eq!(direct.matches(&tree, BUTTON), None);
    assert_eq!(direct.matches(&tree, OUTER), Some(WINDOW));
}

#[test]
fn child_of_backtracks_past_the_nearest_candidate() -> Result<(), SelectorError> {
    let tree = tree();
    // nearest Panel is INNER, whose parent is not a Window; OUTER's is
    let selector = parse_selector("Window > Panel Button")?;
    assert_eq!(selector.matches(&tree, BUTTON), Some(WINDOW));
    let toolbar = parse_selector("Panel.toolbar Button")?;
    assert_eq!(toolbar.matches(&tree, BUTTON), Some(OUTER));
    assert_eq!(parse_selector("Window > Button")?.matches(&tree, BUTTON), None);
    Ok(())
}

#[test]
fn root_has_no_ancestors_to_match() -> Result<(), SelectorError> {
    let tree = tree();
    assert_eq!(parse_selector("Window Window")?.matches(&tree, WINDOW), None);
    assert_eq!(Selector::child_of(None).matches(&tree, WINDOW), None);
    assert_eq!(Selector::child_of(None).matches(&tree, INNER), Some(OUTER));
    Ok(())
}

#[test]
fn any_selector_in_a_list_may_match() -> Result<(), SelectorError> {
    let tree = tree();
    let list = parse_selector_list("Label, Button[kind=ok]")?;
    assert!(matches_selector_list(&tree, BUTTON, &list));
    assert!(!matches_selector_list(&tree, INNER, &list));
    Ok(())
}
