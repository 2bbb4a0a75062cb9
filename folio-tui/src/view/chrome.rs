//! Page chrome: header with nav and theme toggle, footer, back-to-top,
//! notices.

use termpage::{Align, Border, Edges, Element, Justify, Position, Size, Style, TextWrap};

use crate::app::App;
use crate::content;
use crate::notice::NoticeKind;
use crate::theme::Palette;

use super::{BACK_TO_TOP, NAV_MENU, NAV_TOGGLE, THEME_TOGGLE, nav_link_id};

pub fn header(app: &App, palette: &Palette) -> Element {
    let mut bar = Element::row()
        .id("header")
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .padding(Edges::symmetric(1, 2))
        .justify(Justify::SpaceBetween)
        .gap(2)
        .style(Style::new().background(palette.surface))
        .child(Element::text(content::OWNER).style(Style::new().foreground(palette.accent).bold()));

    if app.is_narrow() {
        bar = bar.child(nav_toggle(app, palette));
    } else {
        bar = bar.child(nav_links(app, palette));
    }

    bar.child(theme_toggle(app, palette))
}

fn nav_links(app: &App, palette: &Palette) -> Element {
    let mut row = Element::row().id(NAV_MENU).gap(3);
    for section in &content::SECTIONS {
        row = row.child(nav_link(app, palette, section));
    }
    row
}

fn nav_link(app: &App, palette: &Palette, section: &content::Section) -> Element {
    let active = app.active_section.as_deref() == Some(section.id);
    let mut style = Style::new().foreground(if active { palette.accent } else { palette.text });
    if active {
        style = style.underline();
    }
    Element::text(section.title)
        .id(nav_link_id(section.id))
        .clickable(true)
        .focusable(true)
        .style(style)
        .style_focused(Style::new().foreground(palette.accent).underline())
}

/// Hamburger control. The glyph doubles as the expanded flag.
fn nav_toggle(app: &App, palette: &Palette) -> Element {
    let glyph = if app.menu.is_expanded() { "✕" } else { "☰" };
    Element::text(glyph)
        .id(NAV_TOGGLE)
        .clickable(true)
        .focusable(true)
        .style(Style::new().foreground(palette.text))
        .style_focused(Style::new().foreground(palette.accent))
}

/// The collapsed nav links, dropped down under the header edge.
pub fn nav_dropdown(app: &App, palette: &Palette) -> Element {
    let mut menu = Element::col()
        .id(NAV_MENU)
        .position(Position::Absolute)
        .top(3)
        .right(1)
        .width(Size::Fixed(18))
        .z_index(15)
        .padding(Edges::all(1))
        .style(
            Style::new()
                .background(palette.surface)
                .border(Border::Rounded),
        );
    for section in &content::SECTIONS {
        menu = menu.child(nav_link(app, palette, section));
    }
    menu
}

fn theme_toggle(app: &App, palette: &Palette) -> Element {
    Element::text(app.theme.glyph())
        .id(THEME_TOGGLE)
        .clickable(true)
        .focusable(true)
        .style(Style::new().foreground(palette.text))
        .style_focused(Style::new().foreground(palette.accent))
}

pub fn back_to_top(palette: &Palette) -> Element {
    Element::box_()
        .id(BACK_TO_TOP)
        .position(Position::Absolute)
        .right(2)
        .bottom(1)
        .width(Size::Fixed(9))
        .height(Size::Fixed(3))
        .z_index(5)
        .clickable(true)
        .focusable(true)
        .style(
            Style::new()
                .background(palette.surface)
                .border(Border::Rounded)
                .foreground(palette.accent),
        )
        .style_focused(
            Style::new()
                .background(palette.surface)
                .border(Border::Thick)
                .foreground(palette.accent),
        )
        .child(Element::text("↑ Top"))
}

pub fn footer(app: &App, palette: &Palette) -> Element {
    Element::col()
        .id("footer")
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .align(Align::Center)
        .justify(Justify::Center)
        .child(
            Element::text(format!("© {} {}", app.year, content::OWNER))
                .style(Style::new().foreground(palette.muted)),
        )
}

pub fn notices(app: &App, palette: &Palette) -> Element {
    let mut stack = Element::col()
        .id("notices")
        .position(Position::Absolute)
        .top(1)
        .right(2)
        .width(Size::Fixed(44))
        .z_index(20)
        .gap(1);

    for (index, notice) in app.notices.iter().enumerate() {
        let color = match notice.kind {
            NoticeKind::Info => palette.text,
            NoticeKind::Success => palette.success,
            NoticeKind::Error => palette.error,
        };
        stack = stack.child(
            Element::box_()
                .id(format!("notice-{index}"))
                .width(Size::Fill)
                .padding(Edges::symmetric(0, 1))
                .style(
                    Style::new()
                        .background(palette.surface)
                        .border(Border::Rounded)
                        .foreground(color),
                )
                .child(Element::text(notice.message.clone()).text_wrap(TextWrap::Wrap)),
        );
    }
    stack
}
