use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::event::Event;
use crate::layout::LayoutResult;
use crate::types::Overflow;

/// Tracks vertical scroll offsets for scroll containers.
/// Like FocusState, this is app-managed state that persists across frames;
/// the app copies offsets into the tree before layout via [`apply`].
///
/// [`apply`]: ScrollState::apply
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, u16>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for an element.
    pub fn offset(&self, id: &str) -> u16 {
        self.offsets.get(id).copied().unwrap_or(0)
    }

    /// Set the scroll offset for an element. Clamped against the layout on
    /// the next scroll_by; callers that jump directly should clamp with
    /// [`LayoutResult::max_scroll`] themselves.
    pub fn set_offset(&mut self, id: &str, offset: u16) {
        self.offsets.insert(id.to_string(), offset);
    }

    /// Scroll an element by a delta, clamped to the scrollable range.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, id: &str, dy: i16, layout: &LayoutResult) -> bool {
        let max = layout.max_scroll(id);
        let current = self.offset(id);
        let next = (current as i32 + dy as i32).clamp(0, max as i32) as u16;

        if next != current {
            self.offsets.insert(id.to_string(), next);
            true
        } else {
            false
        }
    }

    /// Apply wheel scroll events. Returns true if any offset changed.
    pub fn handle_wheel(&mut self, events: &[Event], layout: &LayoutResult) -> bool {
        let mut changed = false;
        for event in events {
            if let Event::Scroll {
                target: Some(target),
                dy,
            } = event
            {
                changed |= self.scroll_by(target, *dy, layout);
            }
        }
        changed
    }

    /// Write the tracked offsets into the tree so layout and rendering see
    /// them. Offsets are clamped against the previous frame's layout.
    pub fn apply(&self, root: &mut Element, layout: &LayoutResult) {
        if root.overflow == Overflow::Scroll {
            let max = layout.max_scroll(&root.id);
            root.scroll_y = self.offset(&root.id).min(max);
        }
        if let Content::Children(children) = &mut root.content {
            for child in children {
                self.apply(child, layout);
            }
        }
    }

    /// Fraction of an element currently inside its scroll container's
    /// viewport, 0.0 when fully outside, 1.0 when fully visible.
    pub fn visible_fraction(
        &self,
        container_id: &str,
        element_id: &str,
        layout: &LayoutResult,
    ) -> f32 {
        let Some(area) = layout.scroll_area(container_id) else {
            return 0.0;
        };
        let Some(rect) = layout.get(element_id) else {
            return 0.0;
        };
        if rect.height == 0 {
            return 0.0;
        }

        let offset = self.offset(container_id) as i32;
        let window_top = area.viewport.y as i32 + offset;
        let window_bottom = window_top + area.viewport.height as i32;

        let top = rect.y as i32;
        let bottom = top + rect.height as i32;

        let overlap = bottom.min(window_bottom) - top.max(window_top);
        if overlap <= 0 {
            return 0.0;
        }
        overlap as f32 / rect.height as f32
    }
}
