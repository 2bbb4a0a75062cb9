use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use termpage::{find_element, layout, Element, Event, Key, LayoutResult, Modifiers, MouseButton, Rect};
use tokio_util::sync::CancellationToken;

use folio_tui::app::App;
use folio_tui::form::SimulatedCourier;
use folio_tui::lightbox::Lightbox;
use folio_tui::nav::{BackToTop, Glide, NavMenu, BACK_TO_TOP_THRESHOLD, GLIDE_DURATION, SETTLE};
use folio_tui::theme::appearance::Appearance;
use folio_tui::theme::store::MemoryBackend;
use folio_tui::theme::{PreferenceStore, ThemeService};
use folio_tui::typewriter::{Typewriter, TICK};
use folio_tui::view;

fn test_app(width: u16) -> App {
    let store = PreferenceStore::new(MemoryBackend::new());
    let theme = ThemeService::new(Appearance::Dark);
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    App::new(
        theme,
        store,
        Arc::new(SimulatedCourier),
        tx,
        CancellationToken::new(),
        width,
        30,
    )
}

fn frame(app: &App, width: u16) -> (Element, LayoutResult) {
    let root = app.page();
    let result = layout(&root, Rect::from_size(width, 30));
    (root, result)
}

fn click(app: &mut App, target: &str, width: u16) {
    let (root, result) = frame(app, width);
    let event = Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    app.dispatch(&event, &root, &result, Instant::now());
}

fn wheel_down(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Nav menu outside-click rule
// ============================================================================

fn chrome_tree() -> Element {
    Element::col()
        .id("root")
        .child(
            Element::row()
                .id("header")
                .child(Element::text("☰").id("nav-toggle"))
                .child(
                    Element::col()
                        .id("nav-menu")
                        .child(Element::text("Home").id("nav-home")),
                ),
        )
        .child(Element::box_().id("page"))
}

#[test]
fn test_menu_collapses_on_outside_click() {
    let root = chrome_tree();
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(menu.is_expanded());

    menu.click_outside(&root, "nav-toggle", "nav-menu", Some("page"));
    assert!(!menu.is_expanded());
}

#[test]
fn test_menu_survives_clicks_inside_itself_or_the_toggle() {
    let root = chrome_tree();
    let mut menu = NavMenu::new();
    menu.toggle();

    menu.click_outside(&root, "nav-toggle", "nav-menu", Some("nav-home"));
    assert!(menu.is_expanded(), "click on a link is inside the menu");
    menu.click_outside(&root, "nav-toggle", "nav-menu", Some("nav-menu"));
    assert!(menu.is_expanded());
    menu.click_outside(&root, "nav-toggle", "nav-menu", Some("nav-toggle"));
    assert!(menu.is_expanded());
}

#[test]
fn test_menu_collapses_on_untargeted_click() {
    let root = chrome_tree();
    let mut menu = NavMenu::new();
    menu.toggle();

    menu.click_outside(&root, "nav-toggle", "nav-menu", None);
    assert!(!menu.is_expanded());
}

// ============================================================================
// Back-to-top debounce
// ============================================================================

#[test]
fn test_back_to_top_waits_for_scrolling_to_settle() {
    let mut control = BackToTop::new();
    let t0 = Instant::now();

    control.scrolled(t0);
    assert_eq!(control.deadline(), Some(t0 + SETTLE));
    assert!(!control.tick(t0 + SETTLE / 2, 40));
    assert!(!control.is_visible());

    assert!(control.tick(t0 + SETTLE, 40));
    assert!(control.is_visible());
    assert_eq!(control.deadline(), None);
}

#[test]
fn test_back_to_top_extends_while_scrolling_continues() {
    let mut control = BackToTop::new();
    let t0 = Instant::now();

    control.scrolled(t0);
    control.scrolled(t0 + SETTLE * 4 / 5);
    assert!(!control.tick(t0 + SETTLE, 40), "window restarted");
    assert!(control.tick(t0 + SETTLE * 9 / 5, 40));
    assert!(control.is_visible());
}

#[test]
fn test_back_to_top_threshold_is_exclusive() {
    let mut control = BackToTop::new();
    let t0 = Instant::now();

    control.scrolled(t0);
    assert!(!control.tick(t0 + SETTLE, BACK_TO_TOP_THRESHOLD));
    assert!(!control.is_visible());

    control.scrolled(t0 + SETTLE);
    assert!(control.tick(t0 + SETTLE * 2, BACK_TO_TOP_THRESHOLD + 1));
    assert!(control.is_visible());
}

#[test]
fn test_back_to_top_hides_again_at_the_top() {
    let mut control = BackToTop::new();
    let t0 = Instant::now();

    control.scrolled(t0);
    control.tick(t0 + SETTLE, 40);
    assert!(control.is_visible());

    control.scrolled(t0 + SETTLE);
    assert!(control.tick(t0 + SETTLE * 2, 0));
    assert!(!control.is_visible());
}

// ============================================================================
// Glide easing
// ============================================================================

#[test]
fn test_glide_eases_between_endpoints() {
    let t0 = Instant::now();
    let glide = Glide::new(0, 100, t0);

    assert_eq!(glide.at(t0), (0, false));
    assert_eq!(glide.at(t0 + GLIDE_DURATION / 2), (50, false));
    assert_eq!(glide.at(t0 + GLIDE_DURATION), (100, true));
    assert_eq!(glide.at(t0 + GLIDE_DURATION * 3), (100, true));
}

#[test]
fn test_glide_runs_upward_too() {
    let t0 = Instant::now();
    let glide = Glide::new(80, 20, t0);

    assert_eq!(glide.target(), 20);
    assert_eq!(glide.at(t0 + GLIDE_DURATION / 2), (50, false));
    assert_eq!(glide.at(t0 + GLIDE_DURATION), (20, true));
}

// ============================================================================
// Lightbox
// ============================================================================

#[test]
fn test_lightbox_opens_only_known_projects() {
    let mut lightbox = Lightbox::new();
    lightbox.open(99);
    assert!(!lightbox.is_open());

    lightbox.open(0);
    assert_eq!(lightbox.project(), Some(0));
    lightbox.close();
    assert!(!lightbox.is_open());
}

#[test]
fn test_escape_closes_the_lightbox() {
    let mut app = test_app(100);
    click(&mut app, "project-1", 100);
    assert_eq!(app.lightbox.project(), Some(1));

    let (root, result) = frame(&app, 100);
    let event = Event::Key {
        target: None,
        key: Key::Escape,
        modifiers: Modifiers::new(),
    };
    app.dispatch(&event, &root, &result, Instant::now());
    assert!(!app.lightbox.is_open());
}

#[test]
fn test_backdrop_click_closes_but_card_click_does_not() {
    let mut app = test_app(100);
    click(&mut app, "project-0", 100);
    assert!(app.lightbox.is_open());

    click(&mut app, view::LIGHTBOX_CARD, 100);
    assert!(app.lightbox.is_open(), "card swallows its own clicks");

    click(&mut app, view::LIGHTBOX_BACKDROP, 100);
    assert!(!app.lightbox.is_open());

    click(&mut app, "project-2", 100);
    click(&mut app, view::LIGHTBOX_CLOSE, 100);
    assert!(!app.lightbox.is_open());
}

#[test]
fn test_lightbox_traps_page_scroll() {
    let mut app = test_app(100);
    let raw = [wheel_down(50, 15)];

    // Closed: the wheel moves the page.
    let (root, result) = frame(&app, 100);
    app.handle(&raw, &root, &result, Instant::now());
    assert_eq!(app.scroll.offset(view::PAGE), 1);

    click(&mut app, "project-0", 100);
    let (root, result) = frame(&app, 100);
    app.handle(&raw, &root, &result, Instant::now());
    assert_eq!(app.scroll.offset(view::PAGE), 1, "page held still");
}

// ============================================================================
// Narrow nav flow
// ============================================================================

#[test]
fn test_narrow_header_collapses_links_behind_the_toggle() {
    let app = test_app(60);
    let (root, _) = frame(&app, 60);

    assert!(find_element(&root, view::NAV_TOGGLE).is_some());
    assert!(find_element(&root, view::NAV_MENU).is_none());

    let wide = test_app(100);
    let (root, _) = frame(&wide, 100);
    assert!(find_element(&root, view::NAV_TOGGLE).is_none());
    assert!(find_element(&root, view::NAV_MENU).is_some());
}

#[test]
fn test_nav_link_glides_to_its_section_and_collapses() {
    let mut app = test_app(60);

    click(&mut app, view::NAV_TOGGLE, 60);
    assert!(app.menu.is_expanded());
    let (root, _) = frame(&app, 60);
    assert!(find_element(&root, &view::nav_link_id("contact")).is_some());

    click(&mut app, &view::nav_link_id("about"), 60);
    assert!(!app.menu.is_expanded(), "navigating closes the menu");
    assert_eq!(app.active_section.as_deref(), Some("about"));

    let (_, result) = frame(&app, 60);
    let rect = result.get("about").expect("about laid out");
    let area = result.scroll_area(view::PAGE).expect("page scrolls");
    let expected = rect.y - area.viewport.y;

    app.tick(Instant::now() + GLIDE_DURATION, &result);
    assert_eq!(app.scroll.offset(view::PAGE), expected);
}

#[test]
fn test_untargeted_click_collapses_the_menu() {
    let mut app = test_app(60);
    click(&mut app, view::NAV_TOGGLE, 60);
    assert!(app.menu.is_expanded());

    let (root, result) = frame(&app, 60);
    let event = Event::Click {
        target: None,
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    app.dispatch(&event, &root, &result, Instant::now());
    assert!(!app.menu.is_expanded());
}

#[test]
fn test_back_to_top_click_glides_home() {
    let mut app = test_app(100);
    app.scroll.set_offset(view::PAGE, 40);

    click(&mut app, view::BACK_TO_TOP, 100);
    let (_, result) = frame(&app, 100);
    let t = Instant::now();
    app.tick(t + GLIDE_DURATION / 2, &result);
    let midway = app.scroll.offset(view::PAGE);
    assert!(midway > 0 && midway < 40, "midway offset, got {midway}");

    app.tick(t + GLIDE_DURATION, &result);
    assert_eq!(app.scroll.offset(view::PAGE), 0);
}

// ============================================================================
// Typewriter cadence
// ============================================================================

#[test]
fn test_typewriter_reveals_on_cadence() {
    let mut tw = Typewriter::new("ab日");
    let t0 = Instant::now();

    assert!(!tw.is_started());
    tw.start(t0);
    assert!(tw.is_started());
    assert_eq!(tw.visible(), "");

    assert!(!tw.tick(t0 + TICK / 2));
    assert!(tw.tick(t0 + TICK));
    assert_eq!(tw.visible(), "a");
    assert!(tw.tick(t0 + TICK * 2));
    assert_eq!(tw.visible(), "ab");
    assert!(tw.tick(t0 + TICK * 3));
    assert_eq!(tw.visible(), "ab日");
    assert!(tw.is_done());
    assert_eq!(tw.deadline(), None);
    assert!(!tw.tick(t0 + TICK * 4));
}

#[test]
fn test_typewriter_start_is_idempotent() {
    let mut tw = Typewriter::new("abc");
    let t0 = Instant::now();

    tw.start(t0);
    tw.start(t0 + TICK / 2);
    assert_eq!(tw.deadline(), Some(t0 + TICK), "second start changes nothing");
}

#[test]
fn test_typewriter_advances_one_char_per_tick_call() {
    let mut tw = Typewriter::new("abc");
    let t0 = Instant::now();
    tw.start(t0);

    // A late tick still reveals a single character; the cadence catches up
    // call by call.
    assert!(tw.tick(t0 + TICK * 10));
    assert_eq!(tw.visible(), "a");
    assert!(tw.tick(t0 + TICK * 10));
    assert_eq!(tw.visible(), "ab");
}
