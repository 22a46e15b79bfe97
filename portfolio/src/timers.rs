//! Deferred tasks on a virtual clock.
//!
//! Nothing here sleeps. The owner moves the clock forward (from a real timer
//! in [`crate::runtime`], or by hand in tests) and pops whatever came due.
//! Tasks with equal deadlines fire in scheduling order.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct Timers<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerHandle), T>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `task` once `delay` has elapsed from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, handle), task);
        handle
    }

    /// Drop a pending task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let key = self.queue.keys().find(|(_, h)| *h == handle).copied()?;
        self.queue.remove(&key)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.keys().any(|(_, h)| *h == handle)
    }

    /// Absolute time of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline. Returns None once nothing else is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let (deadline, _) = *self.queue.keys().next()?;
        if deadline > until {
            return None;
        }
        let ((deadline, handle), task) = self.queue.pop_first()?;
        self.now = self.now.max(deadline);
        Some((handle, task))
    }

    /// Move the clock to `to`. The clock never runs backwards.
    pub fn set_now(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }
}
