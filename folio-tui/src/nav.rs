//! Page chrome behaviors: the collapsible nav menu, the back-to-top
//! control, and the eased scroll glide behind both.

use std::time::{Duration, Instant};

use termpage::{Easing, Element, subtree_contains};

/// Terminals narrower than this collapse the nav links behind the toggle.
pub const NARROW_WIDTH: u16 = 80;

/// Page offset past which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: u16 = 30;

/// Scroll events must settle this long before visibility is recomputed.
pub const SETTLE: Duration = Duration::from_millis(100);

pub const GLIDE_DURATION: Duration = Duration::from_millis(300);

/// The collapsible nav menu and its expanded flag.
#[derive(Debug, Default)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Outside-click rule: any click not inside the toggle control or the
    /// menu itself collapses the menu.
    pub fn click_outside(
        &mut self,
        root: &Element,
        toggle_id: &str,
        menu_id: &str,
        target: Option<&str>,
    ) {
        let inside = target.is_some_and(|t| {
            subtree_contains(root, toggle_id, t) || subtree_contains(root, menu_id, t)
        });
        if !inside {
            self.expanded = false;
        }
    }
}

/// Back-to-top control with debounced visibility.
///
/// Visibility is recomputed only after scroll events stop arriving for
/// the settle window, so a long scroll flips it once at the end.
#[derive(Debug, Default)]
pub struct BackToTop {
    visible: bool,
    settle_at: Option<Instant>,
}

impl BackToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A scroll happened: restart the settle window.
    pub fn scrolled(&mut self, now: Instant) {
        self.settle_at = Some(now + SETTLE);
    }

    /// Recompute visibility once the settle window has passed. Returns
    /// true when visibility changed.
    pub fn tick(&mut self, now: Instant, offset: u16) -> bool {
        let Some(due) = self.settle_at else {
            return false;
        };
        if now < due {
            return false;
        }
        self.settle_at = None;

        let visible = offset > BACK_TO_TOP_THRESHOLD;
        if visible != self.visible {
            self.visible = visible;
            true
        } else {
            false
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.settle_at
    }
}

/// An in-flight eased scroll of the page offset.
#[derive(Debug)]
pub struct Glide {
    from: u16,
    to: u16,
    started: Instant,
}

impl Glide {
    pub fn new(from: u16, to: u16, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
        }
    }

    /// Offset at `now`, and whether the glide has finished.
    pub fn at(&self, now: Instant) -> (u16, bool) {
        let elapsed = now.duration_since(self.started);
        if elapsed >= GLIDE_DURATION {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f32() / GLIDE_DURATION.as_secs_f32();
        let eased = Easing::EaseInOut.apply(progress);
        let from = self.from as f32;
        let to = self.to as f32;
        ((from + (to - from) * eased).round() as u16, false)
    }

    pub fn target(&self) -> u16 {
        self.to
    }
}
