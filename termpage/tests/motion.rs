use std::time::{Duration, Instant};

use termpage::{Color, Easing, Element, MotionState, Size, Style, Transitions};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn sliding_box(left: i16) -> Element {
    Element::box_()
        .id("a")
        .left(left)
        .width(Size::Fixed(10))
        .transitions(Transitions::new().left(ms(300), Easing::Linear))
}

// ============================================================================
// Easing
// ============================================================================

#[test]
fn test_easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} starts at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} ends at 1");
    }
}

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

// ============================================================================
// Transition Lifecycle
// ============================================================================

#[test]
fn test_no_transition_without_config() {
    let t0 = Instant::now();
    let mut motion = MotionState::new();

    let before = Element::box_().id("a").left(0);
    let after = Element::box_().id("a").left(20);

    motion.update(&before, t0);
    motion.update(&after, t0 + ms(10));

    assert!(!motion.has_active(), "no declared transitions, no animation");
}

#[test]
fn test_change_starts_transition_and_interpolates() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let mut motion = MotionState::new();

    motion.update(&sliding_box(0), t0);
    assert!(!motion.has_active(), "first frame only snapshots");

    let after = sliding_box(20);
    motion.update(&after, t1);
    assert!(motion.has_active());

    let mut frame = after.clone();
    motion.apply(&mut frame, t1 + ms(150));
    assert_eq!(frame.left, Some(10), "halfway through a linear 300ms slide");

    let mut frame = after.clone();
    motion.apply(&mut frame, t1 + ms(300));
    assert_eq!(frame.left, Some(20), "clamped at the target");
}

#[test]
fn test_transition_prunes_after_duration() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let mut motion = MotionState::new();

    motion.update(&sliding_box(0), t0);
    let after = sliding_box(20);
    motion.update(&after, t1);
    assert!(motion.has_active());

    motion.update(&after, t1 + ms(400));
    assert!(!motion.has_active(), "done transitions are dropped");

    // Authored value stands untouched
    let mut frame = after.clone();
    motion.apply(&mut frame, t1 + ms(400));
    assert_eq!(frame.left, Some(20));
}

#[test]
fn test_retarget_continues_from_current_value() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let t2 = t1 + ms(150);
    let mut motion = MotionState::new();

    motion.update(&sliding_box(0), t0);
    motion.update(&sliding_box(20), t1);

    // Halfway to 20 (at 10), the target moves to 4
    let retargeted = sliding_box(4);
    motion.update(&retargeted, t2);

    let mut frame = retargeted.clone();
    motion.apply(&mut frame, t2 + ms(150));
    assert_eq!(
        frame.left,
        Some(7),
        "halfway from the in-flight value 10 to the new target 4"
    );
}

#[test]
fn test_reduced_motion_skips_animation() {
    let t0 = Instant::now();
    let mut motion = MotionState::new();
    motion.set_reduced_motion(true);

    motion.update(&sliding_box(0), t0);
    motion.update(&sliding_box(20), t0 + ms(10));

    assert!(!motion.has_active());
}

#[test]
fn test_appearing_property_does_not_animate() {
    let t0 = Instant::now();
    let mut motion = MotionState::new();

    let before = Element::box_()
        .id("a")
        .transitions(Transitions::new().left(ms(300), Easing::Linear));
    let after = sliding_box(20);

    motion.update(&before, t0);
    motion.update(&after, t0 + ms(10));

    assert!(!motion.has_active(), "nothing to animate from");
}

#[test]
fn test_removed_element_state_is_pruned() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let mut motion = MotionState::new();

    motion.update(&sliding_box(0), t0);
    motion.update(&sliding_box(20), t1);
    assert!(motion.has_active());

    let unrelated = Element::box_().id("b");
    motion.update(&unrelated, t1 + ms(10));
    assert!(!motion.has_active(), "state for vanished elements is dropped");
}

// ============================================================================
// Property Coverage
// ============================================================================

#[test]
fn test_width_transition_produces_fixed_sizes() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let mut motion = MotionState::new();

    let make = |w: u16| {
        Element::box_()
            .id("bar")
            .width(Size::Fixed(w))
            .transitions(Transitions::new().width(ms(200), Easing::Linear))
    };

    motion.update(&make(10), t0);
    let after = make(30);
    motion.update(&after, t1);

    let mut frame = after.clone();
    motion.apply(&mut frame, t1 + ms(100));
    assert_eq!(frame.width, Size::Fixed(20));
}

#[test]
fn test_color_transition_interpolates_lightness() {
    let t0 = Instant::now();
    let t1 = t0 + ms(10);
    let mut motion = MotionState::new();

    let make = |l: f32| {
        Element::box_()
            .id("panel")
            .style(Style::new().background(Color::oklch(l, 0.1, 100.0)))
            .transitions(Transitions::new().background(ms(200), Easing::Linear))
    };

    motion.update(&make(0.25), t0);
    let after = make(0.75);
    motion.update(&after, t1);

    let mut frame = after.clone();
    motion.apply(&mut frame, t1 + ms(100));

    let Some(bg) = frame.style.background else {
        panic!("background missing");
    };
    let (l, c, h) = bg.to_oklch();
    assert!((l - 0.5).abs() < 1e-3, "lightness halfway, got {l}");
    assert!((c - 0.1).abs() < 1e-3);
    assert!((h - 100.0).abs() < 1e-2);
}

#[test]
fn test_transitions_has_any() {
    assert!(!Transitions::new().has_any());
    assert!(Transitions::new().left(ms(100), Easing::Linear).has_any());
    assert!(Transitions::new().colors(ms(100), Easing::EaseOut).has_any());
}
