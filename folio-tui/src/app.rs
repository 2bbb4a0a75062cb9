//! Application state and event dispatch.
//!
//! Raw terminal events pass through focus and text-input processing, then
//! land here as high-level events. Dispatch mutates state only; the view
//! re-projects it next frame.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::event::Event as CrosstermEvent;
use termpage::{
    Element, Event, FocusState, Key, LayoutResult, ScrollState, TextInputState,
};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::content;
use crate::form::{ContactForm, Courier, SubmitGate};
use crate::lightbox::Lightbox;
use crate::nav::{BackToTop, Glide, NavMenu, NARROW_WIDTH};
use crate::notice::{NoticeBoard, NoticeKind};
use crate::reveal::{self, ViewportObserver};
use crate::theme::appearance::Appearance;
use crate::theme::{PreferenceStore, ThemeService, THEME_KEY};
use crate::typewriter::Typewriter;
use crate::view;

/// Events from background tasks, delivered over the runtime channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A contact form delivery finished, successfully or not.
    Delivered(bool),
    /// The system appearance flipped while no explicit theme is stored.
    AppearanceChanged(Appearance),
}

pub struct App {
    pub form: ContactForm,
    pub theme: ThemeService,
    pub observer: ViewportObserver,
    pub typewriter: Typewriter,
    pub menu: NavMenu,
    pub back_to_top: BackToTop,
    pub lightbox: Lightbox,
    pub notices: NoticeBoard,
    pub focus: FocusState,
    pub inputs: TextInputState,
    pub scroll: ScrollState,
    pub active_section: Option<String>,
    pub year: i32,
    glide: Option<Glide>,
    width: u16,
    height: u16,
    store: PreferenceStore,
    courier: Arc<dyn Courier>,
    events_tx: UnboundedSender<AppEvent>,
    cancel: CancellationToken,
    should_quit: bool,
}

impl App {
    pub fn new(
        theme: ThemeService,
        store: PreferenceStore,
        courier: Arc<dyn Courier>,
        events_tx: UnboundedSender<AppEvent>,
        cancel: CancellationToken,
        width: u16,
        height: u16,
    ) -> Self {
        let form = ContactForm::new();
        let mut inputs = TextInputState::new();
        for field in form.fields() {
            inputs.set(field.id, "");
        }

        // Hero is visible at startup; everything below reveals on scroll.
        let mut observer = ViewportObserver::new(reveal::DEFAULT_THRESHOLD);
        observer.watch(view::TYPEWRITER);
        for section in &content::SECTIONS[1..] {
            observer.watch(section.id);
        }
        for index in 0..content::SKILLS.len() {
            observer.watch(content::skill_bar_id(index));
        }

        Self {
            form,
            theme,
            observer,
            typewriter: Typewriter::new(content::TAGLINE),
            menu: NavMenu::new(),
            back_to_top: BackToTop::new(),
            lightbox: Lightbox::new(),
            notices: NoticeBoard::new(),
            focus: FocusState::new(),
            inputs,
            scroll: ScrollState::new(),
            active_section: None,
            year: chrono::Local::now().year(),
            glide: None,
            width,
            height,
            store,
            courier,
            events_tx,
            cancel,
            should_quit: false,
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> Element {
        view::page(self)
    }

    /// Translate raw terminal events and dispatch them. `root` and `layout`
    /// are the tree and geometry of the frame on screen.
    pub fn handle(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
        now: Instant,
    ) {
        let events = self.focus.process_events(raw, root, layout);
        let events = self.inputs.process_events(&events, root, layout);

        // The lightbox traps scrolling: the page holds still underneath.
        if !self.lightbox.is_open() {
            self.scroll.handle_wheel(&events, layout);
        }

        for event in &events {
            self.dispatch(event, root, layout, now);
        }
    }

    pub fn dispatch(
        &mut self,
        event: &Event,
        root: &Element,
        layout: &LayoutResult,
        now: Instant,
    ) {
        match event {
            Event::Click { target, .. } => {
                self.menu.click_outside(
                    root,
                    view::NAV_TOGGLE,
                    view::NAV_MENU,
                    target.as_deref(),
                );
                if let Some(target) = target.as_deref() {
                    self.clicked(target, layout, now);
                }
            }
            Event::Key {
                target: None,
                key: Key::Escape,
                ..
            } => {
                self.lightbox.close();
            }
            Event::Key {
                target: None,
                key: Key::Char('q'),
                modifiers,
            } if modifiers.none() => {
                self.should_quit = true;
            }
            Event::Key {
                key: Key::Char('c'),
                modifiers,
                ..
            } if modifiers.ctrl => {
                self.should_quit = true;
            }
            Event::Blur { target } => {
                self.form.blurred(target);
            }
            Event::Change { target, value } => {
                self.form.edited(target, value.clone());
            }
            Event::Submit { .. } => {
                self.submit_form();
            }
            Event::Scroll { .. } => {
                if !self.lightbox.is_open() {
                    self.back_to_top.scrolled(now);
                    // Manual scrolling takes over from any glide in flight.
                    self.glide = None;
                }
            }
            Event::Resize { width, height } => {
                self.width = *width;
                self.height = *height;
            }
            _ => {}
        }
    }

    fn clicked(&mut self, target: &str, layout: &LayoutResult, now: Instant) {
        match target {
            view::THEME_TOGGLE => self.toggle_theme(),
            view::NAV_TOGGLE => self.menu.toggle(),
            view::BACK_TO_TOP => self.glide_to(0, now),
            view::SUBMIT => self.submit_form(),
            view::LIGHTBOX_CLOSE | view::LIGHTBOX_BACKDROP => self.lightbox.close(),
            _ => {
                if let Some(section) = target.strip_prefix("nav-") {
                    self.go_to_section(section, layout, now);
                } else if let Some(index) = target
                    .strip_prefix("project-")
                    .and_then(|rest| rest.parse().ok())
                {
                    self.lightbox.open(index);
                }
            }
        }
    }

    fn toggle_theme(&mut self) {
        let next = self.theme.toggle();
        let store = self.store.clone();
        tokio::spawn(async move {
            if let Err(err) = store.set(THEME_KEY, &next.as_str().to_string()).await {
                log::error!("failed to persist theme choice: {err}");
            }
        });
    }

    fn go_to_section(&mut self, section: &str, layout: &LayoutResult, now: Instant) {
        if !content::SECTIONS.iter().any(|s| s.id == section) {
            return;
        }
        self.menu.collapse();
        // The clicked link may collapse away with the menu; focus goes
        // back to the page rather than a node that no longer renders.
        self.focus.blur();

        let Some(rect) = layout.get(section) else {
            return;
        };
        let Some(area) = layout.scroll_area(view::PAGE) else {
            return;
        };
        // Section rects are in the page's virtual coordinates.
        let to = rect
            .y
            .saturating_sub(area.viewport.y)
            .min(layout.max_scroll(view::PAGE));
        self.glide_to(to, now);
        self.active_section = Some(section.to_string());
    }

    fn glide_to(&mut self, to: u16, now: Instant) {
        let from = self.scroll.offset(view::PAGE);
        if from != to {
            self.glide = Some(Glide::new(from, to, now));
        }
    }

    fn submit_form(&mut self) {
        match self.form.submit() {
            SubmitGate::Busy | SubmitGate::Rejected => {}
            SubmitGate::Accepted(delivery) => {
                let courier = Arc::clone(&self.courier);
                let tx = self.events_tx.clone();
                let cancel = self.cancel.clone();
                tokio::spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {}
                        result = courier.deliver(delivery) => {
                            if let Err(err) = &result {
                                log::warn!("delivery failed: {err}");
                            }
                            let _ = tx.send(AppEvent::Delivered(result.is_ok()));
                        }
                    }
                });
            }
        }
    }

    /// Apply an event from a background task.
    pub fn apply(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Delivered(ok) => {
                let notice = self.form.finish(ok);
                let kind = if ok {
                    NoticeKind::Success
                } else {
                    NoticeKind::Error
                };
                self.notices.push(kind, notice, now);
                if ok {
                    let ids = [
                        self.form.name.id,
                        self.form.email.id,
                        self.form.message.id,
                    ];
                    for id in ids {
                        self.inputs.set(id, "");
                    }
                }
            }
            AppEvent::AppearanceChanged(appearance) => {
                if self.theme.system_changed(appearance) {
                    log::debug!("display follows system appearance: {appearance:?}");
                }
            }
        }
    }

    /// Advance time-driven state. `layout` is the geometry of the frame on
    /// screen; on the first frame it is empty and this is a no-op.
    pub fn tick(&mut self, now: Instant, layout: &LayoutResult) {
        self.typewriter.tick(now);

        if let Some(glide) = &self.glide {
            let (offset, done) = glide.at(now);
            let max = layout.max_scroll(view::PAGE);
            self.scroll.set_offset(view::PAGE, offset.min(max));
            self.back_to_top.scrolled(now);
            if done {
                self.glide = None;
            }
        }

        self.back_to_top
            .tick(now, self.scroll.offset(view::PAGE));
        self.notices.prune(now);

        for id in self.observer.observe(&self.scroll, view::PAGE, layout) {
            if id == view::TYPEWRITER {
                self.typewriter.start(now);
            }
        }
    }

    /// Earliest instant at which time-driven state needs another tick.
    pub fn deadline(&self, now: Instant) -> Option<Instant> {
        let mut deadline = earliest(self.typewriter.deadline(), self.back_to_top.deadline());
        deadline = earliest(deadline, self.notices.deadline());
        if self.glide.is_some() {
            deadline = earliest(deadline, Some(now + Duration::from_millis(33)));
        }
        deadline
    }
}

fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
