//! Contact form projection. Field values and cursor state live in the
//! app; this module only maps them onto elements.

use termpage::{Align, Border, Element, Justify, Size, Style};

use crate::app::App;
use crate::form::{self, Field, FieldRole};
use crate::theme::Palette;

use super::SUBMIT;

const FIELD_WIDTH: u16 = 48;

pub fn section(app: &App, palette: &Palette) -> Element {
    let revealed = app.observer.has_fired("contact");
    let mut section = super::sections::shell("contact", "Contact", revealed, palette).child(
        super::sections::prose(
            "contact-intro",
            "Have a project in mind? Send a note.",
            revealed,
            palette,
        ),
    );

    for field in app.form.fields() {
        section = section.child(field_group(app, field, palette));
    }
    section.child(submit_control(app, palette))
}

fn field_group(app: &App, field: &Field, palette: &Palette) -> Element {
    let focused = app.focus.focused() == Some(field.id);
    let frame = if field.error.is_some() {
        palette.error
    } else if focused {
        palette.input_border_focused
    } else {
        palette.border
    };

    let mut input = Element::text_input("")
        .id(field.id)
        .width(Size::Fill)
        .placeholder(placeholder_for(field.role))
        .style(Style::new().foreground(palette.text));
    if let Some(data) = app.inputs.get_data(field.id) {
        input = input.input_state(data, focused);
    }

    let mut group = Element::col()
        .id(format!("{}-group", field.id))
        .width(Size::Fixed(FIELD_WIDTH))
        .child(Element::text(field.label).style(Style::new().foreground(palette.muted)))
        .child(
            Element::box_()
                .width(Size::Fill)
                .height(Size::Fixed(3))
                .style(
                    Style::new()
                        .background(palette.input_background)
                        .border(Border::Rounded)
                        .foreground(frame),
                )
                .child(input),
        );

    if let Some(error) = &field.error {
        group = group.child(
            Element::text(error.clone())
                .id(format!("{}-error", field.id))
                .style(Style::new().foreground(palette.error)),
        );
    }
    group
}

fn placeholder_for(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Name => "Your name",
        FieldRole::Email => "you@example.com",
        FieldRole::Message => "What can I build for you?",
    }
}

fn submit_control(app: &App, palette: &Palette) -> Element {
    let busy = app.form.is_submitting();
    let label = if busy {
        form::SUBMIT_BUSY_LABEL
    } else {
        form::SUBMIT_LABEL
    };

    Element::box_()
        .id(SUBMIT)
        .width(Size::Fixed(18))
        .height(Size::Fixed(3))
        .align(Align::Center)
        .justify(Justify::Center)
        .clickable(true)
        .focusable(true)
        .disabled(busy)
        .style(
            Style::new()
                .background(palette.accent)
                .foreground(palette.background)
                .border(Border::Rounded),
        )
        .style_focused(
            Style::new()
                .background(palette.accent)
                .foreground(palette.text)
                .border(Border::Thick),
        )
        .style_disabled(
            Style::new()
                .background(palette.muted)
                .foreground(palette.background)
                .border(Border::Rounded),
        )
        .child(Element::text(label))
}
