use std::collections::HashSet;
use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use termpage::{
    Color, Easing, Edges, Element, Event, FocusState, Key, Overflow, Position, ScrollState, Size,
    Style, Terminal, Transitions,
};

const SECTIONS: &[&str] = &["Intro", "About", "Skills", "Projects", "Contact"];

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("reveal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut scroll = ScrollState::new();

    // Sections stay lit once they have been half visible
    let mut revealed: HashSet<String> = HashSet::new();

    loop {
        let mut root = ui(&revealed, scroll.offset("page"));
        scroll.apply(&mut root, term.layout());
        term.render(&root)?;

        // Keep animating while transitions run
        let timeout = if term.has_active_motion() {
            Some(Duration::from_millis(33))
        } else {
            None
        };
        let raw_events = term.poll(timeout)?;
        let events = focus.process_events(&raw_events, &root, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                Event::Click {
                    target: Some(target),
                    ..
                } if target == "backtop" => {
                    scroll.set_offset("page", 0);
                }
                _ => {}
            }
        }

        scroll.handle_wheel(&events, term.layout());

        for section in SECTIONS {
            let id = format!("section-{}", section.to_lowercase());
            if revealed.contains(&id) {
                continue;
            }
            if scroll.visible_fraction("page", &id, term.layout()) >= 0.5 {
                log::debug!("[reveal] {id} entered view");
                revealed.insert(id);
            }
        }
    }
}

fn ui(revealed: &HashSet<String>, offset: u16) -> Element {
    let mut page = Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .overflow(Overflow::Scroll)
        .padding(Edges::symmetric(1, 4))
        .gap(2);

    for (i, section) in SECTIONS.iter().enumerate() {
        let id = format!("section-{}", section.to_lowercase());
        let lit = revealed.contains(&id);

        let (l, c) = if lit { (0.75, 0.12) } else { (0.35, 0.02) };
        let hue = 200.0 + i as f32 * 30.0;

        page = page.child(
            Element::col()
                .id(&id)
                .height(Size::Fixed(9))
                .padding(Edges::all(1))
                .style(Style::new().background(Color::oklch(l * 0.35, c * 0.4, hue)))
                .transitions(Transitions::new().colors(Duration::from_millis(600), Easing::EaseOut))
                .child(
                    Element::text(*section)
                        .style(Style::new().bold().foreground(Color::oklch(l, c, hue))),
                )
                .child(Element::text(if lit { "~ visible ~" } else { "" })),
        );
    }

    let mut root = Element::box_()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .child(page);

    // Appears once the page is scrolled a bit
    if offset > 5 {
        root = root.child(
            Element::text(" ^ top ")
                .id("backtop")
                .clickable(true)
                .position(Position::Absolute)
                .right(2)
                .bottom(1)
                .style(Style::new().background(Color::oklch(0.5, 0.1, 250.0)).bold()),
        );
    }

    root
}
