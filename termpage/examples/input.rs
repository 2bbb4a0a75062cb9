use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use termpage::{
    Border, Color, Edges, Element, Event, FocusState, Key, Size, Style, Terminal, TextInputState,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("input.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();

    inputs.set("name", "");
    inputs.set("email", "");

    let mut submitted: Option<(String, String)> = None;

    loop {
        let root = ui(&inputs, focus.focused(), submitted.as_ref());
        term.render(&root)?;

        let raw_events = term.poll(None)?;
        let events = focus.process_events(&raw_events, &root, term.layout());
        let events = inputs.process_events(&events, &root, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    target: None,
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                Event::Submit { .. } => {
                    submitted = Some((
                        inputs.get("name").to_string(),
                        inputs.get("email").to_string(),
                    ));
                }
                Event::Click {
                    target: Some(target),
                    ..
                } if target == "send" => {
                    submitted = Some((
                        inputs.get("name").to_string(),
                        inputs.get("email").to_string(),
                    ));
                }
                _ => {}
            }
        }
    }
}

fn ui(
    inputs: &TextInputState,
    focused: Option<&str>,
    submitted: Option<&(String, String)>,
) -> Element {
    let field = |id: &str, label: &str, hint: &str| {
        let data = inputs.get_data(id).cloned().unwrap_or_default();
        Element::col().gap(0).child(Element::text(label)).child(
            Element::text_input("")
                .id(id)
                .width(Size::Fixed(40))
                .placeholder(hint)
                .input_state(&data, focused == Some(id))
                .style(
                    Style::new()
                        .background(Color::oklch(0.2, 0.02, 250.0))
                        .border(Border::Single),
                )
                .style_focused(
                    Style::new()
                        .background(Color::oklch(0.25, 0.04, 250.0))
                        .border(Border::Thick),
                ),
        )
    };

    let mut root = Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .padding(Edges::all(2))
        .gap(1)
        .child(Element::text("Form Demo - Tab between fields, Enter to send, Esc quits"))
        .child(Element::text(""))
        .child(field("name", "Name", "Your name"))
        .child(field("email", "Email", "you@example.com"))
        .child(
            Element::text("  Send  ")
                .id("send")
                .focusable(true)
                .clickable(true)
                .style(Style::new().background(Color::oklch(0.45, 0.12, 250.0)).bold())
                .style_focused(Style::new().background(Color::oklch(0.6, 0.15, 140.0)).bold()),
        );

    if let Some((name, email)) = submitted {
        root = root
            .child(Element::text(""))
            .child(Element::text(format!("Sent: {name} <{email}>")));
    }

    root
}
