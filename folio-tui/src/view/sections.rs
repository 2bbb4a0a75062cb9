//! The portfolio sections: hero, about, skills, projects.

use std::time::Duration;

use termpage::{
    Align, Border, Easing, Edges, Element, Justify, Position, Size, Style, TextWrap, Transitions,
};

use crate::app::App;
use crate::content;
use crate::theme::Palette;

use super::TYPEWRITER;

const REVEAL: Duration = Duration::from_millis(600);
const FILL_GROW: Duration = Duration::from_millis(800);

/// Section scaffold: full-width column with a slide-in title. Height is
/// content-driven so wrapping stays correct at any terminal width.
pub(super) fn shell(
    id: &'static str,
    title: &'static str,
    revealed: bool,
    palette: &Palette,
) -> Element {
    Element::col()
        .id(id)
        .width(Size::Fill)
        .padding(Edges::new(1, 4, 2, 4))
        .gap(1)
        .child(title_line(id, title, revealed, palette))
}

fn title_line(id: &str, title: &str, revealed: bool, palette: &Palette) -> Element {
    Element::text(title)
        .id(format!("{id}-title"))
        .position(Position::Relative)
        .left(if revealed { 0 } else { 6 })
        .style(
            Style::new()
                .foreground(if revealed { palette.accent } else { palette.muted })
                .bold(),
        )
        .transitions(
            Transitions::new()
                .position(REVEAL, Easing::EaseOut)
                .colors(REVEAL, Easing::EaseOut),
        )
}

/// Body copy that fades in with its section. Needs a stable id for the
/// color transition to track.
pub(super) fn prose(
    id: impl Into<String>,
    text: impl Into<String>,
    revealed: bool,
    palette: &Palette,
) -> Element {
    Element::text(text)
        .id(id)
        .text_wrap(TextWrap::Wrap)
        .style(Style::new().foreground(if revealed { palette.text } else { palette.muted }))
        .transitions(Transitions::new().colors(REVEAL, Easing::EaseOut))
}

pub fn hero(app: &App, palette: &Palette) -> Element {
    let typed = app.typewriter.visible();
    let caret = if app.typewriter.is_started() && !app.typewriter.is_done() {
        "▌"
    } else {
        ""
    };

    Element::col()
        .id("home")
        .width(Size::Fill)
        .height(Size::Fixed(14))
        .padding(Edges::new(2, 4, 1, 4))
        .gap(1)
        .align(Align::Center)
        .justify(Justify::Center)
        .child(Element::text("Hi, I'm").style(Style::new().foreground(palette.muted)))
        .child(Element::text(content::OWNER).style(Style::new().foreground(palette.accent).bold()))
        .child(
            Element::text(format!("{typed}{caret}"))
                .id(TYPEWRITER)
                .style(Style::new().foreground(palette.text)),
        )
        .child(
            Element::text("Scroll to explore ↓").style(Style::new().foreground(palette.muted).dim()),
        )
}

pub fn about(app: &App, palette: &Palette) -> Element {
    let revealed = app.observer.has_fired("about");
    let mut section = shell("about", "About", revealed, palette);
    for (index, paragraph) in content::ABOUT.iter().enumerate() {
        section = section.child(prose(format!("about-p{index}"), *paragraph, revealed, palette));
    }
    section
}

pub fn skills(app: &App, palette: &Palette) -> Element {
    let revealed = app.observer.has_fired("skills");
    let section = shell("skills", "Skills", revealed, palette);

    if app.is_narrow() {
        let mut column = Element::col().gap(1);
        for (index, skill) in content::SKILLS.iter().enumerate() {
            column = column.child(skill_meter(app, index, skill, palette));
        }
        section.child(column)
    } else {
        let half = content::SKILLS.len().div_ceil(2);
        let mut left = Element::col().gap(1);
        let mut right = Element::col().gap(1);
        for (index, skill) in content::SKILLS.iter().enumerate() {
            let meter = skill_meter(app, index, skill, palette);
            if index < half {
                left = left.child(meter);
            } else {
                right = right.child(meter);
            }
        }
        section.child(Element::row().gap(4).child(left).child(right))
    }
}

/// One skill meter. The fill animates from zero to its percentage the
/// first time the bar scrolls into view.
fn skill_meter(app: &App, index: usize, skill: &content::Skill, palette: &Palette) -> Element {
    const TRACK: u16 = 34;

    let shown = app.observer.has_fired(&content::skill_bar_id(index));
    let fill = if shown {
        (skill.percent as u32 * TRACK as u32 / 100) as u16
    } else {
        0
    };

    Element::col()
        .id(content::skill_bar_id(index))
        .width(Size::Fixed(TRACK))
        .child(
            Element::row()
                .width(Size::Fill)
                .justify(Justify::SpaceBetween)
                .child(Element::text(skill.name).style(Style::new().foreground(palette.text)))
                .child(
                    Element::text(format!("{}%", skill.percent))
                        .style(Style::new().foreground(palette.muted)),
                ),
        )
        .child(
            Element::box_()
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .style(Style::new().background(palette.border))
                .child(
                    Element::box_()
                        .id(content::skill_fill_id(index))
                        .width(Size::Fixed(fill))
                        .height(Size::Fixed(1))
                        .style(Style::new().background(palette.accent))
                        .transitions(Transitions::new().width(FILL_GROW, Easing::EaseOut)),
                ),
        )
}

pub fn projects(app: &App, palette: &Palette) -> Element {
    let revealed = app.observer.has_fired("projects");
    let section = shell("projects", "Projects", revealed, palette);

    let cards = content::PROJECTS.iter().enumerate();
    if app.is_narrow() {
        let mut column = Element::col().gap(1);
        for (index, project) in cards {
            column = column.child(project_card(index, project, palette));
        }
        section.child(column)
    } else {
        let mut row = Element::row().gap(2);
        for (index, project) in cards {
            row = row.child(project_card(index, project, palette));
        }
        section.child(row)
    }
}

fn project_card(index: usize, project: &content::Project, palette: &Palette) -> Element {
    Element::col()
        .id(content::project_card_id(index))
        .width(Size::Fixed(26))
        .height(Size::Fixed(9))
        .padding(Edges::symmetric(0, 1))
        .gap(1)
        .clickable(true)
        .focusable(true)
        .style(
            Style::new()
                .background(palette.surface)
                .border(Border::Rounded)
                .foreground(palette.border),
        )
        .style_focused(
            Style::new()
                .background(palette.surface)
                .border(Border::Thick)
                .foreground(palette.accent),
        )
        .child(Element::text(project.title).style(Style::new().foreground(palette.accent).bold()))
        .child(
            Element::text(project.summary)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().foreground(palette.text)),
        )
        .child(
            Element::text("enter ⏎ to view")
                .style(Style::new().foreground(palette.muted).dim()),
        )
}
