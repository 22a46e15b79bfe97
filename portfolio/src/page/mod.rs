//! The page: one surface, one clock, and the components bound to them.
//!
//! [`Page::mount`] plays the part of `DOMContentLoaded`. After that the
//! owner feeds surface events through [`Page::dispatch`] and moves time with
//! [`Page::advance`]. Events the surface raises itself (a scroll caused by
//! `scroll_to`) are delivered once the handler that caused them returns.

mod context;
mod snapshot;

pub use context::Context;
pub use snapshot::{FieldSnapshot, PageSnapshot};

use std::time::Duration;

use log::{debug, info, trace, warn};
use pagedom::{Event, ScrollBehavior, Surface, Tag, Target};

use crate::config::PageConfig;
use crate::form::{FormTask, FormValidator};
use crate::navbar::NavbarScroll;
use crate::prefs::{MemoryBackend, PreferenceBackend};
use crate::reveal::RevealAnimation;
use crate::smooth_scroll::SmoothScroll;
use crate::theme::ThemeManager;
use crate::timers::Timers;
use crate::typing::TypingAnimation;

/// Id the typing animation assigns to the hero title.
pub const TYPING_TITLE_ID: &str = "typing-title";

/// Upper bound on rounds of surface-raised events per dispatch.
const MAX_FLUSH_ROUNDS: usize = 32;

/// Which component a subscription belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    Theme,
    Form,
    SmoothScroll,
    Navbar,
    Reveal,
}

/// Deferred work on the page clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Form(FormTask),
    Typing,
}

pub struct Page<S: Surface> {
    surface: S,
    config: PageConfig,
    timers: Timers<Task>,
    listeners: pagedom::Listeners<Listener>,
    prefs: Box<dyn PreferenceBackend>,
    mounted: bool,

    theme: Option<ThemeManager>,
    form: Option<FormValidator>,
    smooth_scroll: Option<SmoothScroll>,
    reveal: Option<RevealAnimation>,
    navbar: Option<NavbarScroll>,
    typing: Option<TypingAnimation>,
}

impl<S: Surface> Page<S> {
    /// A page with in-memory preferences.
    pub fn new(surface: S, config: PageConfig) -> Self {
        Self {
            surface,
            config,
            timers: Timers::new(),
            listeners: pagedom::Listeners::new(),
            prefs: Box::new(MemoryBackend::new()),
            mounted: false,
            theme: None,
            form: None,
            smooth_scroll: None,
            reveal: None,
            navbar: None,
            typing: None,
        }
    }

    /// Use `backend` for the theme preference. Call before `mount`.
    pub fn with_preferences(mut self, backend: impl PreferenceBackend + 'static) -> Self {
        self.prefs = Box::new(backend);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn preferences(&self) -> &dyn PreferenceBackend {
        self.prefs.as_ref()
    }

    pub fn form(&self) -> Option<&FormValidator> {
        self.form.as_ref()
    }

    pub fn theme(&self) -> Option<&ThemeManager> {
        self.theme.as_ref()
    }

    pub fn reveal(&self) -> Option<&RevealAnimation> {
        self.reveal.as_ref()
    }

    pub fn navbar(&self) -> Option<&NavbarScroll> {
        self.navbar.as_ref()
    }

    pub fn typing(&self) -> Option<&TypingAnimation> {
        self.typing.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Time elapsed on the page clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Absolute time of the next deferred task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// Build every component and bind it to the surface. Idempotent.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let config = self.config.clone();
        let mut cx = Context::new(&mut self.surface, &mut self.timers, &mut self.listeners);

        let mut theme = ThemeManager::new(config.theme, self.prefs.as_ref());
        theme.mount(&mut cx, self.prefs.as_mut());
        self.theme = Some(theme);

        let mut form = FormValidator::new(config.form);
        form.mount(&mut cx);
        self.form = Some(form);

        let smooth_scroll = SmoothScroll::new(config.navigation);
        smooth_scroll.mount(&mut cx);
        self.smooth_scroll = Some(smooth_scroll);

        let mut reveal = RevealAnimation::new(config.reveal);
        reveal.mount(&mut cx);
        self.reveal = Some(reveal);

        let navbar_id = cx.surface().query_first_class(&config.navbar.navbar_class);
        let navbar = NavbarScroll::new(config.navbar, navbar_id);
        navbar.mount(&mut cx);
        self.navbar = Some(navbar);

        if let Some(title) = cx.surface().query_first_class(&config.typing.title_class) {
            match cx.surface_mut().set_id(&title, TYPING_TITLE_ID) {
                Ok(()) => {
                    let mut typing = TypingAnimation::new(TYPING_TITLE_ID, config.typing);
                    typing.start(&mut cx);
                    self.typing = Some(typing);
                }
                Err(e) => warn!("typing animation disabled: {e}"),
            }
        }

        info!("page mounted with {} listener(s)", self.listeners.len());
        self.flush_surface_events();
    }

    /// Deliver `event` to its listeners, then run the surface's default
    /// action unless a listener prevented it. Returns whether the default
    /// was prevented.
    pub fn dispatch(&mut self, event: Event) -> bool {
        if !self.mounted {
            warn!("dispatch before mount: {:?}", event);
        }
        let prevented = self.deliver(&event);
        self.flush_surface_events();
        prevented
    }

    /// Scroll the window the way a user would, then deliver the resulting
    /// scroll event.
    pub fn scroll_window(&mut self, top: u32) {
        self.surface.scroll_to(top, ScrollBehavior::Auto);
        self.flush_surface_events();
    }

    /// Move the clock forward by `by`, firing every task that comes due.
    pub fn advance(&mut self, by: Duration) {
        let to = self.timers.now() + by;
        self.advance_to(to);
    }

    /// Move the clock to `to`. Tasks scheduled by fired tasks also run if
    /// they come due before `to`. Events the surface queued on its own
    /// (a resize) are delivered first.
    pub fn advance_to(&mut self, to: Duration) {
        self.flush_surface_events();
        while let Some((_, task)) = self.timers.pop_due(to) {
            self.run_task(task);
            self.flush_surface_events();
        }
        self.timers.set_now(to);
    }

    /// Read-only summary of what is on screen.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::capture(self)
    }

    fn deliver(&mut self, event: &Event) -> bool {
        trace!("dispatch {:?}", event);

        let path = self.propagation_path(event);

        if let Event::Input { target, value } = event
            && let Err(e) = self.surface.set_value(target, value)
        {
            debug!("input dropped: {e}");
            return false;
        }
        if let Event::Click { target } = event
            && self.is_disabled(target)
        {
            trace!("click on disabled '{target}' ignored");
            return false;
        }

        let hits = self.listeners.matching(event.kind(), &path);
        let mut prevented = false;
        for (current, listener) in hits {
            prevented |= self.run_listener(listener, &current, event);
        }

        if !prevented {
            self.default_action(event);
        }
        prevented
    }

    fn propagation_path(&self, event: &Event) -> Vec<Target> {
        match event.target() {
            Target::Window => vec![Target::Window],
            Target::Element(id) if event.bubbles() => self
                .surface
                .ancestry(&id)
                .into_iter()
                .map(Target::Element)
                .collect(),
            target => vec![target],
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.surface
            .ancestry(id)
            .iter()
            .any(|id| self.surface.element(id).is_some_and(|el| el.disabled))
    }

    /// What the surface does on its own when nobody prevents it: hash links
    /// jump to their section, submit buttons submit their form.
    fn default_action(&mut self, event: &Event) {
        match event {
            Event::Click { target } => {
                let path = self.surface.ancestry(target);
                for id in &path {
                    let Some(el) = self.surface.element(id) else {
                        continue;
                    };
                    if el.tag == Tag::Anchor {
                        if let Some(section) = el.attribute("href").and_then(|h| h.strip_prefix('#'))
                            && let Some(top) = self.surface.element(section).map(|s| s.rect.top())
                        {
                            self.surface.scroll_to(top, ScrollBehavior::Auto);
                        }
                        return;
                    }
                    if el.tag == Tag::Button && el.attribute("type") == Some("submit") {
                        let form = path.iter().find(|id| {
                            self.surface.element(id).is_some_and(|el| el.tag == Tag::Form)
                        });
                        if let Some(form) = form.cloned() {
                            self.deliver(&Event::submit(form));
                        }
                        return;
                    }
                }
            }
            Event::Submit { target } => {
                info!("form '{target}' submitted without a handler, page would navigate");
            }
            _ => {}
        }
    }

    fn run_listener(&mut self, listener: Listener, current: &Target, event: &Event) -> bool {
        let mut cx = Context::new(&mut self.surface, &mut self.timers, &mut self.listeners);
        match listener {
            Listener::Theme => {
                if let Some(theme) = &mut self.theme {
                    theme.handle_event(event, &mut cx, self.prefs.as_mut());
                }
            }
            Listener::Form => {
                if let Some(form) = &mut self.form {
                    form.handle_event(event, &mut cx);
                }
            }
            Listener::SmoothScroll => {
                if let Some(smooth_scroll) = &self.smooth_scroll {
                    smooth_scroll.handle_event(event, current, &mut cx);
                }
            }
            Listener::Navbar => {
                if let Some(navbar) = &self.navbar {
                    navbar.handle_scroll(&mut cx);
                }
            }
            Listener::Reveal => {
                if let Some(reveal) = &mut self.reveal {
                    reveal.check(&mut cx);
                }
            }
        }
        cx.default_prevented()
    }

    fn run_task(&mut self, task: Task) {
        trace!("task {:?} at {:?}", task, self.timers.now());
        let mut cx = Context::new(&mut self.surface, &mut self.timers, &mut self.listeners);
        match task {
            Task::Form(task) => {
                if let Some(form) = &mut self.form {
                    form.handle_task(task, &mut cx);
                }
            }
            Task::Typing => {
                if let Some(typing) = &mut self.typing {
                    typing.tick(&mut cx);
                }
            }
        }
    }

    fn flush_surface_events(&mut self) {
        for _ in 0..MAX_FLUSH_ROUNDS {
            let events = self.surface.take_events();
            if events.is_empty() {
                return;
            }
            for event in events {
                self.deliver(&event);
            }
        }
        warn!("surface kept raising events, giving up after {MAX_FLUSH_ROUNDS} rounds");
    }
}
