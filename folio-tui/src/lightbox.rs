//! Lightbox overlay state.
//!
//! Open shows the project's full-size art over a dimmed backdrop and
//! traps page scrolling. Closes on the close control, a click on the
//! backdrop, or Escape.

use crate::content;

#[derive(Debug, Default)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, index: usize) {
        if index < content::PROJECTS.len() {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Index of the project on display.
    pub fn project(&self) -> Option<usize> {
        self.open
    }
}
