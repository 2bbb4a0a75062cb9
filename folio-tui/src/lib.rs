//! A portfolio page for the terminal.
//!
//! Five scrollable sections with a persisted light/dark theme, scroll
//! reveals, a typewriter hero, a validated contact form, and a project
//! lightbox. State lives in [`app::App`]; every frame the view projects
//! it into a fresh element tree for `termpage` to lay out and paint.

pub mod app;
pub mod content;
pub mod error;
pub mod form;
pub mod lightbox;
pub mod nav;
pub mod notice;
pub mod paths;
pub mod reveal;
pub mod runtime;
pub mod theme;
pub mod typewriter;
pub mod view;
