use std::time::Duration;

use pagedom::{EventKind, ListenerId, Listeners, Surface, Target};

use super::{Listener, Task};
use crate::timers::{TimerHandle, Timers};

/// What a component gets while handling an event, a task, or mounting:
/// the surface, the page clock, and the listener registry.
pub struct Context<'a, S: Surface> {
    surface: &'a mut S,
    timers: &'a mut Timers<Task>,
    listeners: &'a mut Listeners<Listener>,
    default_prevented: bool,
}

impl<'a, S: Surface> Context<'a, S> {
    pub fn new(
        surface: &'a mut S,
        timers: &'a mut Timers<Task>,
        listeners: &'a mut Listeners<Listener>,
    ) -> Self {
        Self {
            surface,
            timers,
            listeners,
            default_prevented: false,
        }
    }

    pub fn surface(&self) -> &S {
        self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.surface
    }

    /// Run `task` after `delay`. Non-blocking.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TimerHandle {
        self.timers.schedule(delay, task)
    }

    /// Subscribe `listener` to `kind` events on `target`.
    pub fn listen(&mut self, target: Target, kind: EventKind, listener: Listener) -> ListenerId {
        self.listeners.on(target, kind, listener)
    }

    /// Suppress the surface's default action for the current event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
