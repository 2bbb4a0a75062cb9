//! Lightbox overlay: full-size project art over a dimmed page.

use termpage::{
    Align, Backdrop, Border, Edges, Element, Justify, Position, Size, Style, TextWrap,
};

use crate::content;
use crate::theme::Palette;

use super::{LIGHTBOX_BACKDROP, LIGHTBOX_CARD, LIGHTBOX_CLOSE};

pub fn lightbox(index: usize, palette: &Palette) -> Element {
    let project = &content::PROJECTS[index];

    Element::col()
        .id(LIGHTBOX_BACKDROP)
        .position(Position::Absolute)
        .left(0)
        .top(0)
        .width(Size::Fill)
        .height(Size::Fill)
        .z_index(10)
        .backdrop(Backdrop::Dim(0.55))
        .clickable(true)
        .align(Align::Center)
        .justify(Justify::Center)
        .child(card(project, palette))
}

fn card(project: &content::Project, palette: &Palette) -> Element {
    // Art lines are 30 columns; border and padding bring the card to 34.
    let mut card = Element::col()
        .id(LIGHTBOX_CARD)
        .width(Size::Fixed(34))
        .padding(Edges::all(1))
        .gap(1)
        .clickable(true)
        .style(
            Style::new()
                .background(palette.surface)
                .foreground(palette.border)
                .border(Border::Double),
        )
        .child(
            Element::row()
                .width(Size::Fill)
                .justify(Justify::SpaceBetween)
                .child(
                    Element::text(project.title)
                        .style(Style::new().foreground(palette.accent).bold()),
                )
                .child(
                    Element::text("✕")
                        .id(LIGHTBOX_CLOSE)
                        .clickable(true)
                        .focusable(true)
                        .style(Style::new().foreground(palette.muted))
                        .style_focused(Style::new().foreground(palette.error).bold()),
                ),
        )
        .child(art(project, palette));

    card = card.child(
        Element::text(project.caption)
            .text_wrap(TextWrap::Wrap)
            .style(Style::new().foreground(palette.muted)),
    );
    card
}

fn art(project: &content::Project, palette: &Palette) -> Element {
    let mut block = Element::col();
    for line in project.art.trim_start_matches('\n').lines() {
        block = block.child(Element::text(line).style(Style::new().foreground(palette.text)));
    }
    block
}
