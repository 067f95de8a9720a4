use facetdom::{render_lines, Color, Element, Overflow, Rgb, Style};

fn plain(elements: &[Element]) -> Vec<String> {
    render_lines(elements).iter().map(|l| l.plain()).collect()
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second"));

    assert_eq!(plain(&[root]), vec!["first", "second"]);
}

#[test]
fn test_row_joins_children_with_space() {
    let root = Element::row()
        .child(Element::link("remove"))
        .child(Element::text("Paris"))
        .child(Element::text("12"));

    assert_eq!(plain(&[root]), vec!["remove Paris 12"]);
}

#[test]
fn test_empty_row_renders_nothing() {
    let root = Element::col().child(Element::row()).child(Element::text("x"));

    assert_eq!(plain(&[root]), vec!["x"]);
}

// ============================================================================
// Clipping and scrolling
// ============================================================================

fn body(rows: usize) -> Element {
    Element::col()
        .id("body")
        .max_height(3)
        .overflow_y(Overflow::Scroll)
        .children((0..rows).map(|i| Element::text(format!("row {i}"))))
}

#[test]
fn test_max_height_clips() {
    assert_eq!(plain(&[body(5)]), vec!["row 0", "row 1", "row 2"]);
}

#[test]
fn test_scroll_offset_skips_lines() {
    let root = body(5).scroll_offset(0, 2);

    assert_eq!(plain(&[root]), vec!["row 2", "row 3", "row 4"]);
}

#[test]
fn test_hidden_overflow_ignores_offset() {
    let root = body(5).overflow_y(Overflow::Hidden).scroll_offset(0, 2);

    assert_eq!(plain(&[root]), vec!["row 0", "row 1", "row 2"]);
}

#[test]
fn test_scroll_by_clamps_to_content() {
    let mut root = body(5);

    assert!(facetdom::scroll::scroll_by(&mut root, 10));
    assert_eq!(root.scroll_offset.1, 2);

    assert!(!facetdom::scroll::scroll_by(&mut root, 1));
    assert!(facetdom::scroll::scroll_by(&mut root, -10));
    assert_eq!(root.scroll_offset.1, 0);
}

#[test]
fn test_scroll_by_requires_scroll_overflow() {
    let mut root = body(5).overflow_y(Overflow::Visible);

    assert!(!facetdom::scroll::scroll_by(&mut root, 1));
    assert_eq!(root.scroll_offset.1, 0);
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_clickable_span_carries_target() {
    let root = Element::row()
        .child(Element::link("reset").id("reset"))
        .child(Element::text("Country"));

    let lines = render_lines(&[root]);
    assert_eq!(lines[0].spans[0].target.as_deref(), Some("reset"));
    assert_eq!(lines[0].spans[2].target, None);
}

#[test]
fn test_style_is_inherited() {
    let root = Element::row()
        .style(Style::new().bold())
        .child(Element::text("label").style(Style::new().underline()));

    let lines = render_lines(&[root]);
    let style = &lines[0].spans[0].style.text_style;
    assert!(style.bold);
    assert!(style.underline);
}

#[test]
fn test_line_width_counts_display_columns() {
    let lines = render_lines(&[Element::text("日本")]);

    assert_eq!(lines[0].width(), 4);
}

#[test]
fn test_color_resolution() {
    let palette = |name: &str| (name == "link").then(|| Rgb::new(0, 0, 255));

    assert_eq!(Color::var("link").resolve(palette), Some(Rgb::new(0, 0, 255)));
    assert_eq!(Color::var("unknown").resolve(palette), None);
    assert_eq!(
        Color::Rgb { r: 1, g: 2, b: 3 }.resolve(palette),
        Some(Rgb::new(1, 2, 3))
    );
}

#[test]
fn test_foreground_inherited_unless_overridden() {
    let root = Element::row()
        .style(Style::new().foreground(Color::var("muted")))
        .child(Element::text("a"))
        .child(Element::text("b").style(Style::new().foreground(Color::var("link"))));

    let lines = render_lines(&[root]);
    assert_eq!(lines[0].spans[0].style.foreground, Some(Color::var("muted")));
    assert_eq!(lines[0].spans[2].style.foreground, Some(Color::var("link")));
}
