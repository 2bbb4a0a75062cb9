use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::color::Color;
use crate::element::{Content, Element};
use crate::types::Size;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Per-element transition declarations. A property with a config animates
/// whenever its authored value changes between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transitions {
    pub left: Option<TransitionConfig>,
    pub top: Option<TransitionConfig>,
    pub width: Option<TransitionConfig>,
    pub height: Option<TransitionConfig>,
    pub background: Option<TransitionConfig>,
    pub foreground: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, duration: Duration, easing: Easing) -> Self {
        self.left = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn top(mut self, duration: Duration, easing: Easing) -> Self {
        self.top = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn width(mut self, duration: Duration, easing: Easing) -> Self {
        self.width = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn height(mut self, duration: Duration, easing: Easing) -> Self {
        self.height = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn background(mut self, duration: Duration, easing: Easing) -> Self {
        self.background = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn foreground(mut self, duration: Duration, easing: Easing) -> Self {
        self.foreground = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Set transition for position offsets (left, top).
    pub fn position(self, duration: Duration, easing: Easing) -> Self {
        self.left(duration, easing).top(duration, easing)
    }

    /// Set transition for size (width, height).
    pub fn size(self, duration: Duration, easing: Easing) -> Self {
        self.width(duration, easing).height(duration, easing)
    }

    /// Set transition for colors (background, foreground).
    pub fn colors(self, duration: Duration, easing: Easing) -> Self {
        self.background(duration, easing)
            .foreground(duration, easing)
    }

    pub fn has_any(&self) -> bool {
        self.left.is_some()
            || self.top.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.background.is_some()
            || self.foreground.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Property {
    Left,
    Top,
    Width,
    Height,
    Background,
    Foreground,
}

#[derive(Debug, Clone, Copy)]
enum Value {
    I16(i16),
    U16(u16),
    Color(Color),
}

#[derive(Debug, Clone, Copy, Default)]
struct Snapshot {
    left: Option<i16>,
    top: Option<i16>,
    width: Option<u16>,
    height: Option<u16>,
    background: Option<Color>,
    foreground: Option<Color>,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    from: Value,
    to: Value,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

/// Detects authored property changes between frames and carries the
/// interpolated values while a transition runs.
#[derive(Debug, Default)]
pub struct MotionState {
    snapshots: HashMap<String, Snapshot>,
    active: HashMap<(String, Property), Active>,
    reduced_motion: bool,
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, property changes land instantly instead of animating.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Compare the authored tree against the previous frame, starting and
    /// pruning transitions. Call once per frame before `apply`.
    pub fn update(&mut self, root: &Element, now: Instant) {
        self.active
            .retain(|_, t| now.duration_since(t.start) < t.duration);
        self.update_element(root, now);

        let mut live = HashSet::new();
        collect_ids(root, &mut live);
        self.snapshots.retain(|id, _| live.contains(id));
        self.active.retain(|(id, _), _| live.contains(id));
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let current = snapshot(element);
        let t = &element.transitions;

        if let Some(prev) = self.snapshots.get(&element.id).copied() {
            self.diff_property(
                &element.id,
                Property::Left,
                prev.left.map(Value::I16),
                current.left.map(Value::I16),
                t.left,
                now,
            );
            self.diff_property(
                &element.id,
                Property::Top,
                prev.top.map(Value::I16),
                current.top.map(Value::I16),
                t.top,
                now,
            );
            self.diff_property(
                &element.id,
                Property::Width,
                prev.width.map(Value::U16),
                current.width.map(Value::U16),
                t.width,
                now,
            );
            self.diff_property(
                &element.id,
                Property::Height,
                prev.height.map(Value::U16),
                current.height.map(Value::U16),
                t.height,
                now,
            );
            self.diff_property(
                &element.id,
                Property::Background,
                prev.background.map(Value::Color),
                current.background.map(Value::Color),
                t.background,
                now,
            );
            self.diff_property(
                &element.id,
                Property::Foreground,
                prev.foreground.map(Value::Color),
                current.foreground.map(Value::Color),
                t.foreground,
                now,
            );
        }

        self.snapshots.insert(element.id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now);
            }
        }
    }

    fn diff_property(
        &mut self,
        id: &str,
        property: Property,
        prev: Option<Value>,
        current: Option<Value>,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let Some(config) = config else { return };
        let (Some(prev), Some(current)) = (prev, current) else {
            return;
        };
        if values_equal(&prev, &current) {
            return;
        }
        if self.reduced_motion {
            return;
        }

        let key = (id.to_string(), property);

        // Retarget mid-flight from the interpolated value, not the origin
        let from = if let Some(existing) = self.active.get(&key) {
            interpolate(existing, now)
        } else {
            prev
        };

        self.active.insert(
            key,
            Active {
                from,
                to: current,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Overwrite animated properties in a tree clone with their current
    /// interpolated values. The clone is what gets laid out and painted.
    pub fn apply(&self, root: &mut Element, now: Instant) {
        if self.active.is_empty() {
            return;
        }
        self.apply_element(root, now);
    }

    fn apply_element(&self, element: &mut Element, now: Instant) {
        for (property, value) in self.values_for(&element.id, now) {
            match (property, value) {
                (Property::Left, Value::I16(v)) => element.left = Some(v),
                (Property::Top, Value::I16(v)) => element.top = Some(v),
                (Property::Width, Value::U16(v)) => element.width = Size::Fixed(v),
                (Property::Height, Value::U16(v)) => element.height = Size::Fixed(v),
                (Property::Background, Value::Color(c)) => {
                    element.style.background = Some(c);
                }
                (Property::Foreground, Value::Color(c)) => {
                    element.style.foreground = Some(c);
                }
                _ => {}
            }
        }

        if let Content::Children(children) = &mut element.content {
            for child in children {
                self.apply_element(child, now);
            }
        }
    }

    fn values_for(&self, id: &str, now: Instant) -> Vec<(Property, Value)> {
        self.active
            .iter()
            .filter(|((el, _), _)| el == id)
            .map(|((_, property), active)| (*property, interpolate(active, now)))
            .collect()
    }
}

fn snapshot(element: &Element) -> Snapshot {
    Snapshot {
        left: element.left,
        top: element.top,
        width: match element.width {
            Size::Fixed(w) => Some(w),
            _ => None,
        },
        height: match element.height {
            Size::Fixed(h) => Some(h),
            _ => None,
        },
        background: element.style.background,
        foreground: element.style.foreground,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::I16(x), Value::I16(y)) => x == y,
        (Value::U16(x), Value::U16(y)) => x == y,
        (Value::Color(x), Value::Color(y)) => x == y,
        _ => false,
    }
}

fn interpolate(active: &Active, now: Instant) -> Value {
    let elapsed = now.duration_since(active.start);
    let progress = if active.duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / active.duration.as_secs_f32()).min(1.0)
    };
    let eased = active.easing.apply(progress);

    match (active.from, active.to) {
        (Value::I16(from), Value::I16(to)) => Value::I16(lerp_i16(from, to, eased)),
        (Value::U16(from), Value::U16(to)) => Value::U16(lerp_u16(from, to, eased)),
        (Value::Color(from), Value::Color(to)) => Value::Color(lerp_color(&from, &to, eased)),
        _ => active.to,
    }
}

fn lerp_i16(from: i16, to: i16, t: f32) -> i16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as i16
}

fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}

/// Interpolate in Oklch, taking the short way around the hue circle.
fn lerp_color(from: &Color, to: &Color, t: f32) -> Color {
    let (from_l, from_c, from_h) = from.to_oklch();
    let (to_l, to_c, to_h) = to.to_oklch();

    let l = from_l + (to_l - from_l) * t;
    let c = from_c + (to_c - from_c) * t;

    let mut dh = to_h - from_h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    let h = (from_h + dh * t).rem_euclid(360.0);

    Color::oklch(l, c, h)
}

fn collect_ids(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids(child, ids);
        }
    }
}
