use termpage::{Element, Event, Key, LayoutResult, Modifiers, Size, TextInputState};

fn form() -> Element {
    Element::col()
        .id("form")
        .child(Element::text_input("").id("field").width(Size::Fixed(20)))
        .child(Element::text("Send").id("send").clickable(true))
}

fn key_press(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::default(),
    }
}

fn type_str(inputs: &mut TextInputState, root: &Element, target: &str, text: &str) -> Vec<Event> {
    let presses: Vec<Event> = text
        .chars()
        .map(|c| key_press(target, Key::Char(c)))
        .collect();
    inputs.process_events(&presses, root, &LayoutResult::new())
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_emits_change_with_value() {
    let root = form();
    let mut inputs = TextInputState::new();

    let events = type_str(&mut inputs, &root, "field", "hi");

    assert_eq!(
        events,
        vec![
            Event::Change {
                target: "field".to_string(),
                value: "h".to_string(),
            },
            Event::Change {
                target: "field".to_string(),
                value: "hi".to_string(),
            },
        ]
    );
    assert_eq!(inputs.get("field"), "hi");
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "abc");

    let events = inputs.process_events(
        &[key_press("field", Key::Backspace)],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            value: "ab".to_string(),
        }]
    );
}

#[test]
fn test_backspace_at_start_is_consumed() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "abc");
    inputs.get_data_mut("field").cursor = 0;

    let events = inputs.process_events(
        &[key_press("field", Key::Backspace)],
        &root,
        &LayoutResult::new(),
    );

    assert!(events.is_empty(), "nothing changed, nothing emitted");
    assert_eq!(inputs.get("field"), "abc");
}

#[test]
fn test_delete_removes_at_cursor() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "abc");
    inputs.get_data_mut("field").cursor = 1;

    let events = inputs.process_events(
        &[key_press("field", Key::Delete)],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            value: "ac".to_string(),
        }]
    );
    assert_eq!(inputs.get_data("field").unwrap().cursor, 1);
}

#[test]
fn test_insert_mid_text() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "ac");
    inputs.get_data_mut("field").cursor = 1;

    let events = type_str(&mut inputs, &root, "field", "b");

    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            value: "abc".to_string(),
        }]
    );
    assert_eq!(inputs.get_data("field").unwrap().cursor, 2);
}

#[test]
fn test_cursor_movement_is_silent() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "abc");

    let events = inputs.process_events(
        &[
            key_press("field", Key::Home),
            key_press("field", Key::Right),
            key_press("field", Key::Left),
            key_press("field", Key::End),
        ],
        &root,
        &LayoutResult::new(),
    );

    assert!(events.is_empty(), "movement keys are consumed");
    assert_eq!(inputs.get_data("field").unwrap().cursor, 3);
}

#[test]
fn test_ctrl_u_clears_to_start() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "hello world");
    inputs.get_data_mut("field").cursor = 6;

    let events = inputs.process_events(
        &[Event::Key {
            target: Some("field".to_string()),
            key: Key::Char('u'),
            modifiers: Modifiers::ctrl(),
        }],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            value: "world".to_string(),
        }]
    );
    assert_eq!(inputs.get_data("field").unwrap().cursor, 0);
}

#[test]
fn test_unicode_editing_respects_char_boundaries() {
    let root = form();
    let mut inputs = TextInputState::new();

    type_str(&mut inputs, &root, "field", "héllo");
    assert_eq!(inputs.get("field"), "héllo");
    assert_eq!(inputs.get_data("field").unwrap().cursor, 5);

    let events = inputs.process_events(
        &[
            key_press("field", Key::Backspace),
            key_press("field", Key::Backspace),
            key_press("field", Key::Backspace),
            key_press("field", Key::Backspace),
        ],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(inputs.get("field"), "h");
    if let Some(Event::Change { value, .. }) = events.last() {
        assert_eq!(value, "h");
    } else {
        panic!("expected a change event");
    }
}

// ============================================================================
// Submit and Passthrough
// ============================================================================

#[test]
fn test_enter_submits() {
    let root = form();
    let mut inputs = TextInputState::new();
    inputs.set("field", "hello");

    let events = inputs.process_events(
        &[key_press("field", Key::Enter)],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(
        events,
        vec![Event::Submit {
            target: "field".to_string(),
        }]
    );
    assert_eq!(inputs.get("field"), "hello", "submit does not clear the value");
}

#[test]
fn test_keys_for_non_inputs_pass_through() {
    let root = form();
    let mut inputs = TextInputState::new();

    let pressed = key_press("send", Key::Char('x'));
    let events = inputs.process_events(
        &[pressed.clone()],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(events, vec![pressed]);
}

#[test]
fn test_disabled_input_passes_through() {
    let root = Element::col().child(
        Element::text_input("")
            .id("field")
            .disabled(true),
    );
    let mut inputs = TextInputState::new();

    let pressed = key_press("field", Key::Char('x'));
    let events = inputs.process_events(
        &[pressed.clone()],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(events, vec![pressed]);
    assert_eq!(inputs.get("field"), "");
}

#[test]
fn test_unfocused_keys_pass_through() {
    let root = form();
    let mut inputs = TextInputState::new();

    let pressed = Event::Key {
        target: None,
        key: Key::Char('q'),
        modifiers: Modifiers::default(),
    };
    let events = inputs.process_events(
        &[pressed.clone()],
        &root,
        &LayoutResult::new(),
    );

    assert_eq!(events, vec![pressed]);
}
