//! Render projection: the element tree is rebuilt from app state every
//! frame and never read back.

mod chrome;
mod contact;
mod overlay;
mod sections;

use std::time::Duration;

use termpage::{Easing, Element, Overflow, Size, Style, Transitions};

use crate::app::App;

pub const PAGE: &str = "page";
pub const THEME_TOGGLE: &str = "theme-toggle";
pub const NAV_TOGGLE: &str = "nav-toggle";
pub const NAV_MENU: &str = "nav-menu";
pub const BACK_TO_TOP: &str = "back-to-top";
pub const TYPEWRITER: &str = "typewriter";
pub const SUBMIT: &str = "submit";
pub const LIGHTBOX_BACKDROP: &str = "lightbox-backdrop";
pub const LIGHTBOX_CARD: &str = "lightbox-card";
pub const LIGHTBOX_CLOSE: &str = "lightbox-close";

pub fn nav_link_id(section_id: &str) -> String {
    format!("nav-{section_id}")
}

/// Build the whole page for one frame.
pub fn page(app: &App) -> Element {
    let palette = app.theme.palette();

    let mut root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(
            Style::new()
                .background(palette.background)
                .foreground(palette.text),
        )
        .transitions(Transitions::new().colors(Duration::from_millis(250), Easing::EaseOut))
        .child(chrome::header(app, &palette))
        .child(body(app, &palette));

    if app.menu.is_expanded() && app.is_narrow() {
        root = root.child(chrome::nav_dropdown(app, &palette));
    }
    if app.back_to_top.is_visible() {
        root = root.child(chrome::back_to_top(&palette));
    }
    if let Some(index) = app.lightbox.project() {
        root = root.child(overlay::lightbox(index, &palette));
    }
    if !app.notices.is_empty() {
        root = root.child(chrome::notices(app, &palette));
    }
    root
}

/// The scrolling body: every section in a column, laid out at virtual
/// coordinates and windowed by the page viewport.
fn body(app: &App, palette: &crate::theme::Palette) -> Element {
    Element::col()
        .id(PAGE)
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow(Overflow::Scroll)
        .scroll_y(app.scroll.offset(PAGE))
        .gap(1)
        .child(sections::hero(app, palette))
        .child(sections::about(app, palette))
        .child(sections::skills(app, palette))
        .child(sections::projects(app, palette))
        .child(contact::section(app, palette))
        .child(chrome::footer(app, palette))
}
