use std::sync::Arc;
use std::time::Instant;

use termpage::{layout, Element, LayoutResult, Overflow, Rect, ScrollState, Size};
use tokio_util::sync::CancellationToken;

use folio_tui::app::App;
use folio_tui::form::SimulatedCourier;
use folio_tui::reveal::ViewportObserver;
use folio_tui::theme::appearance::Appearance;
use folio_tui::theme::store::MemoryBackend;
use folio_tui::theme::{PreferenceStore, ThemeService};
use folio_tui::typewriter::TICK;

fn strip(id: &str, height: u16) -> Element {
    Element::box_()
        .id(id)
        .width(Size::Fill)
        .height(Size::Fixed(height))
}

/// A 10-row window over three 8-row strips, scrolled to `offset`.
fn scrolled_page(offset: u16) -> (LayoutResult, ScrollState) {
    let root = Element::col()
        .id("page")
        .width(Size::Fixed(40))
        .height(Size::Fixed(10))
        .overflow(Overflow::Scroll)
        .scroll_y(offset)
        .child(strip("hero", 8))
        .child(strip("about", 8))
        .child(strip("skills", 8));
    let result = layout(&root, Rect::from_size(40, 10));
    let mut scroll = ScrollState::new();
    scroll.set_offset("page", offset);
    (result, scroll)
}

// ============================================================================
// One-shot firing
// ============================================================================

#[test]
fn test_fires_only_for_sufficiently_visible_elements() {
    let mut observer = ViewportObserver::default();
    observer.watch("hero");
    observer.watch("about");

    // hero fills rows 0..8 of the window; about only peeks in at 2 of 8 rows.
    let (result, scroll) = scrolled_page(0);
    let fired = observer.observe(&scroll, "page", &result);

    assert_eq!(fired, vec!["hero".to_string()]);
    assert!(observer.has_fired("hero"));
    assert!(!observer.has_fired("about"));
    assert!(observer.is_watching("about"));
}

#[test]
fn test_fires_when_scrolled_into_view() {
    let mut observer = ViewportObserver::default();
    observer.watch("about");

    let (result, scroll) = scrolled_page(0);
    assert!(observer.observe(&scroll, "page", &result).is_empty());

    let (result, scroll) = scrolled_page(6);
    assert_eq!(
        observer.observe(&scroll, "page", &result),
        vec!["about".to_string()]
    );
}

#[test]
fn test_never_refires_after_leaving_and_reentering() {
    let mut observer = ViewportObserver::default();
    observer.watch("about");

    let (result, scroll) = scrolled_page(6);
    assert_eq!(observer.observe(&scroll, "page", &result).len(), 1);

    // Scroll away and back; the element stays revealed, silently.
    let (result, scroll) = scrolled_page(0);
    assert!(observer.observe(&scroll, "page", &result).is_empty());
    let (result, scroll) = scrolled_page(6);
    assert!(observer.observe(&scroll, "page", &result).is_empty());
    assert!(observer.has_fired("about"));
}

#[test]
fn test_threshold_is_inclusive() {
    // Window 1..11 shows 3 of about's 8 rows: 0.375, under the default 0.5.
    let mut observer = ViewportObserver::default();
    observer.watch("about");
    let (result, scroll) = scrolled_page(1);
    assert!(observer.observe(&scroll, "page", &result).is_empty());

    // Window 2..12 shows 4 of 8 rows: exactly the threshold fires.
    let (result, scroll) = scrolled_page(2);
    assert_eq!(observer.observe(&scroll, "page", &result).len(), 1);
}

#[test]
fn test_watch_ignores_duplicates_and_fired_ids() {
    let mut observer = ViewportObserver::default();
    observer.watch("hero");
    observer.watch("hero");

    let (result, scroll) = scrolled_page(0);
    assert_eq!(observer.observe(&scroll, "page", &result).len(), 1);

    observer.watch("hero");
    assert!(!observer.is_watching("hero"));
    assert!(observer.observe(&scroll, "page", &result).is_empty());
}

#[test]
fn test_unlaid_out_elements_are_never_visible() {
    let mut observer = ViewportObserver::default();
    observer.watch("ghost");

    let (result, scroll) = scrolled_page(0);
    assert!(observer.observe(&scroll, "page", &result).is_empty());
    assert!(observer.is_watching("ghost"));
}

// ============================================================================
// Typewriter autostart through the app
// ============================================================================

#[test]
fn test_typewriter_starts_when_its_line_is_visible() {
    let store = PreferenceStore::new(MemoryBackend::new());
    let theme = ThemeService::new(Appearance::Dark);
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(
        theme,
        store,
        Arc::new(SimulatedCourier),
        tx,
        CancellationToken::new(),
        100,
        30,
    );

    let root = app.page();
    let result = layout(&root, Rect::from_size(100, 30));

    let t0 = Instant::now();
    assert!(!app.typewriter.is_started());
    app.tick(t0, &result);
    assert!(app.typewriter.is_started(), "hero is on screen at startup");
    assert_eq!(app.typewriter.visible(), "");

    app.tick(t0 + TICK, &result);
    assert_eq!(app.typewriter.visible(), "W");
    app.tick(t0 + TICK + TICK, &result);
    assert_eq!(app.typewriter.visible(), "We");
}
