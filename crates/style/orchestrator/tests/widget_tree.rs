use anyhow::Result;
use style_orchestrator::{
    Colour, EngineConfig, Fill, Rect, ResourceRegistry, Theme, WidgetId, WidgetTree,
};

const THEME: &str = "
    /* base widgets */
    Window { background: #202020; color: white }
    Button { padding: 2; border: 1 black; background: gray }
    Panel.toolbar Button { flex: 2 }
    Panel.toolbar > Button[kind=ok] { background: green }
";

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

/// Window > Panel.toolbar > Button[kind=ok], plus a bare Button under Window.
fn build(tree: &mut WidgetTree) -> Result<(WidgetId, WidgetId, WidgetId, WidgetId)> {
    let window = tree.add_root("Window");
    let panel = tree.add_child(window, "Panel")?;
    tree.add_class(panel, "toolbar")?;
    let ok = tree.add_child(panel, "Button")?;
    tree.set_attribute(ok, "kind", "ok")?;
    let plain = tree.add_child(window, "Button")?;
    Ok((window, panel, ok, plain))
}

fn themed_tree() -> Result<WidgetTree> {
    let config = EngineConfig::default();
    let mut resources = ResourceRegistry::new(&config);
    let theme = Theme::parse(THEME, &mut resources)?;
    Ok(WidgetTree::with_theme(config, theme))
}

#[test]
fn more_specific_rules_win() -> Result<()> {
    init_logging();
    let mut tree = themed_tree()?;
    let (_, _, ok, plain) = build(&mut tree)?;

    let green = Colour::parse("green")?;
    let ok_style = tree.computed_style(ok)?;
    assert_eq!(ok_style.background(), &Fill::Colour(green));
    assert_eq!(ok_style.flex(), 2);

    let plain_style = tree.computed_style(plain)?;
    assert_eq!(plain_style.background(), &Fill::Colour(Colour::parse("gray")?));
    assert_eq!(plain_style.flex(), 1);
    Ok(())
}

#[test]
fn text_colour_flows_down() -> Result<()> {
    let mut tree = themed_tree()?;
    let (window, panel, ok, _) = build(&mut tree)?;
    assert_eq!(tree.computed_style(window)?.text_colour(), Colour::WHITE);
    assert_eq!(tree.computed_style(panel)?.text_colour(), Colour::WHITE);
    assert_eq!(tree.computed_style(ok)?.text_colour(), Colour::WHITE);
    Ok(())
}

#[test]
fn root_text_colour_comes_from_config() -> Result<()> {
    let mut tree = WidgetTree::new(EngineConfig::default().with_default_text_colour(Colour::WHITE));
    let label = tree.add_root("Label");
    assert_eq!(tree.computed_style(label)?.text_colour(), Colour::WHITE);
    Ok(())
}

#[test]
fn inline_style_beats_every_selector() -> Result<()> {
    let mut tree = themed_tree()?;
    let (_, _, ok, _) = build(&mut tree)?;
    let mut resources = ResourceRegistry::new(tree.config());
    tree.set_inline_style(ok, [("background", "red"), ("flex", "5")], &mut resources)?;
    let style = tree.computed_style(ok)?;
    assert_eq!(style.background(), &Fill::Colour(Colour::parse("red")?));
    assert_eq!(style.flex(), 5);
    Ok(())
}

#[test]
fn ancestor_class_changes_restyle_descendants() -> Result<()> {
    let mut tree = themed_tree()?;
    let (_, panel, ok, _) = build(&mut tree)?;
    assert_eq!(tree.computed_style(ok)?.flex(), 2);
    tree.remove_class(panel, "toolbar")?;
    assert_eq!(tree.computed_style(ok)?.flex(), 1);
    tree.add_class(panel, "toolbar")?;
    assert_eq!(tree.computed_style(ok)?.flex(), 2);
    Ok(())
}

#[test]
fn replacing_the_theme_restyles_everything() -> Result<()> {
    let mut tree = themed_tree()?;
    let (window, _, ok, _) = build(&mut tree)?;
    assert_eq!(tree.computed_style(ok)?.flex(), 2);

    let mut resources = ResourceRegistry::new(tree.config());
    tree.set_theme(Theme::parse("Button { flex: 7 }", &mut resources)?);
    assert_eq!(tree.computed_style(ok)?.flex(), 7);
    assert_eq!(tree.computed_style(window)?.background(), &Fill::Transparent);
    Ok(())
}

#[test]
fn render_caches_until_the_rect_changes() -> Result<()> {
    init_logging();
    let mut tree = themed_tree()?;
    let (_, _, ok, _) = build(&mut tree)?;
    tree.set_rect(ok, Rect::new(0, 0, 40, 20)?)?;

    // eight border regions and the background
    assert_eq!(tree.render(ok)?.triangle_count(), 18);
    assert_eq!(tree.content_rect(ok)?, Rect::from_edges(3, 3, 37, 17));

    tree.rect_mut(ok)?.set_width(50)?;
    assert_eq!(tree.content_rect(ok)?, Rect::from_edges(3, 3, 47, 17));
    Ok(())
}

#[test]
fn opaque_buttons_outline_as_one_filled_path() -> Result<()> {
    let mut tree = themed_tree()?;
    let (_, _, ok, _) = build(&mut tree)?;
    tree.set_rect(ok, Rect::new(0, 0, 40, 20)?)?;
    let outline = tree.outline(ok)?;
    assert_eq!(outline.path_count(), 1);
    assert_eq!(outline.fill(), Some(Colour::parse("green")?));
    Ok(())
}

#[test]
fn oversized_padding_renders_no_content() -> Result<()> {
    let mut tree = themed_tree()?;
    let (_, _, _, plain) = build(&mut tree)?;
    tree.set_rect(plain, Rect::new(0, 0, 4, 4)?)?;
    assert_eq!(tree.content_rect(plain)?, None);
    Ok(())
}

#[test]
fn subtree_render_merges_in_tree_order() -> Result<()> {
    let mut tree = themed_tree()?;
    let (window, _, ok, plain) = build(&mut tree)?;
    for id in [window, ok, plain] {
        tree.set_rect(id, Rect::new(0, 0, 30, 30)?)?;
    }
    let merged = tree.render_subtree(window)?;
    // window background, then two bordered buttons; the panel has no size
    assert_eq!(merged.triangle_count(), 2 + 18 + 18);
    Ok(())
}

#[test]
fn bad_inline_values_leave_the_old_rule() -> Result<()> {
    let mut tree = themed_tree()?;
    let (_, _, ok, _) = build(&mut tree)?;
    let mut resources = ResourceRegistry::new(tree.config());
    tree.set_inline_style(ok, [("flex", "3")], &mut resources)?;
    assert!(tree.set_inline_style(ok, [("flex", "0")], &mut resources).is_err());
    assert_eq!(tree.computed_style(ok)?.flex(), 3);
    Ok(())
}
