use termpage::{layout, Element, Event, LayoutResult, Overflow, Rect, ScrollState, Size};

fn page() -> Element {
    let mut root = Element::col()
        .id("page")
        .width(Size::Fixed(40))
        .height(Size::Fixed(10))
        .overflow(Overflow::Scroll)
        .gap(1);
    for i in 0..4 {
        root = root.child(
            Element::box_()
                .id(format!("s{i}"))
                .width(Size::Fill)
                .height(Size::Fixed(6)),
        );
    }
    root
}

fn page_layout() -> LayoutResult {
    layout(&page(), Rect::from_size(40, 10))
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn test_scroll_by_clamps_to_content() {
    let result = page_layout();
    let mut scroll = ScrollState::new();

    assert!(scroll.scroll_by("page", 5, &result));
    assert_eq!(scroll.offset("page"), 5);

    assert!(scroll.scroll_by("page", 100, &result));
    assert_eq!(scroll.offset("page"), 17, "clamped to content height minus viewport");

    assert!(!scroll.scroll_by("page", 1, &result), "already at the end");

    assert!(scroll.scroll_by("page", -100, &result));
    assert_eq!(scroll.offset("page"), 0);
}

#[test]
fn test_scroll_by_unknown_container_stays_put() {
    let result = page_layout();
    let mut scroll = ScrollState::new();

    assert!(!scroll.scroll_by("nope", 5, &result));
    assert_eq!(scroll.offset("nope"), 0);
}

#[test]
fn test_handle_wheel_applies_targeted_events() {
    let result = page_layout();
    let mut scroll = ScrollState::new();

    let events = vec![
        Event::Scroll {
            target: Some("page".to_string()),
            dy: 3,
        },
        Event::Scroll { target: None, dy: 1 },
    ];

    assert!(scroll.handle_wheel(&events, &result));
    assert_eq!(scroll.offset("page"), 3, "untargeted wheel events are ignored");
}

#[test]
fn test_apply_writes_clamped_offsets_into_tree() {
    let result = page_layout();
    let mut scroll = ScrollState::new();
    scroll.set_offset("page", 50);

    let mut root = page();
    scroll.apply(&mut root, &result);

    assert_eq!(root.scroll_y, 17, "offset clamped while applying");
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_visible_fraction_at_top() {
    let result = page_layout();
    let scroll = ScrollState::new();

    assert_eq!(scroll.visible_fraction("page", "s0", &result), 1.0);
    assert_eq!(
        scroll.visible_fraction("page", "s1", &result),
        0.5,
        "three of six rows inside the viewport"
    );
    assert_eq!(scroll.visible_fraction("page", "s2", &result), 0.0);
}

#[test]
fn test_visible_fraction_follows_offset() {
    let result = page_layout();
    let mut scroll = ScrollState::new();
    scroll.set_offset("page", 10);

    assert_eq!(scroll.visible_fraction("page", "s0", &result), 0.0);
    assert_eq!(scroll.visible_fraction("page", "s1", &result), 0.5);
    assert_eq!(scroll.visible_fraction("page", "s2", &result), 1.0);
    assert_eq!(scroll.visible_fraction("page", "s3", &result), 0.0);
}

#[test]
fn test_visible_fraction_unknown_ids() {
    let result = page_layout();
    let scroll = ScrollState::new();

    assert_eq!(scroll.visible_fraction("nope", "s0", &result), 0.0);
    assert_eq!(scroll.visible_fraction("page", "nope", &result), 0.0);
}
