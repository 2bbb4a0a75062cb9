//! Typewriter effect: reveal a line one character per tick.

use std::time::{Duration, Instant};

pub const TICK: Duration = Duration::from_millis(100);

/// Tick-driven character reveal. Does nothing until `start` is called;
/// the observer calls `start` when the element first becomes visible.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
    next_tick: Option<Instant>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
            next_tick: None,
        }
    }

    /// Begin revealing. Idempotent: a running or finished typewriter is
    /// left alone.
    pub fn start(&mut self, now: Instant) {
        if self.next_tick.is_none() && !self.is_done() {
            self.next_tick = Some(now + TICK);
        }
    }

    pub fn is_started(&self) -> bool {
        self.next_tick.is_some() || self.shown > 0
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// Reveal the next character if a tick is due. Returns true when the
    /// visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_tick else {
            return false;
        };
        if now < due {
            return false;
        }

        self.shown += 1;
        if self.is_done() {
            self.next_tick = None;
        } else {
            self.next_tick = Some(due + TICK);
        }
        true
    }

    /// When the next character is due, while running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// The revealed prefix, on a char boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }
}
