//! Viewport observer: one-shot visibility triggers.
//!
//! The analog of watching elements scroll into view. Each watched element
//! fires once when at least `threshold` of its laid-out rect is inside
//! the page viewport, then stops being watched for good.

use std::collections::HashSet;

use termpage::{LayoutResult, ScrollState};

pub const DEFAULT_THRESHOLD: f32 = 0.5;

#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f32,
    watched: Vec<String>,
    fired: HashSet<String>,
}

impl ViewportObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            watched: Vec::new(),
            fired: HashSet::new(),
        }
    }

    /// Watch an element. Watching an already-fired id does nothing.
    pub fn watch(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.fired.contains(&id) && !self.watched.contains(&id) {
            self.watched.push(id);
        }
    }

    /// Check every watched element against the current layout. Elements
    /// at or past the threshold fire exactly once and are returned;
    /// re-entering the viewport later never fires them again.
    pub fn observe(
        &mut self,
        scroll: &ScrollState,
        container: &str,
        layout: &LayoutResult,
    ) -> Vec<String> {
        let mut newly_fired = Vec::new();

        self.watched.retain(|id| {
            let fraction = scroll.visible_fraction(container, id, layout);
            if fraction >= self.threshold {
                newly_fired.push(id.clone());
                false
            } else {
                true
            }
        });

        for id in &newly_fired {
            self.fired.insert(id.clone());
        }

        newly_fired
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watched.iter().any(|watched| watched == id)
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
