//! Real-time driver for a [`Page`].
//!
//! The page itself only knows a virtual clock. The runtime maps it onto
//! tokio time: it sleeps until the next deferred task is due or a command
//! arrives, whichever comes first, and moves the page clock to the elapsed
//! wall time before handling either.

use log::{debug, info};
use pagedom::{Event, Surface};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::page::{Page, PageSnapshot};

/// Input to a running page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Event),
    /// Scroll the window to an absolute offset, as a user would.
    ScrollTo(u32),
    /// Report a snapshot through the runtime's snapshot callback.
    Snapshot,
}

type SnapshotCallback = Box<dyn FnMut(&PageSnapshot) + Send>;

pub struct Runtime<S: Surface> {
    page: Page<S>,
    on_snapshot: Option<SnapshotCallback>,
}

impl<S: Surface> Runtime<S> {
    pub fn new(page: Page<S>) -> Self {
        Self {
            page,
            on_snapshot: None,
        }
    }

    /// Called for every [`Command::Snapshot`].
    pub fn on_snapshot(mut self, callback: impl FnMut(&PageSnapshot) + Send + 'static) -> Self {
        self.on_snapshot = Some(Box::new(callback));
        self
    }

    /// Mount the page and run until `commands` closes. Pending tasks that
    /// have not come due by then are dropped. Returns the page for
    /// inspection.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> Page<S> {
        let start = Instant::now();
        self.page.mount();

        loop {
            let deadline = self.page.next_deadline().map(|at| start + at);

            tokio::select! {
                command = commands.recv() => {
                    self.page.advance_to(start.elapsed());
                    match command {
                        Some(command) => self.handle(command),
                        None => break,
                    }
                }
                _ = sleep_or_forever(deadline) => {
                    self.page.advance_to(start.elapsed());
                }
            }
        }

        info!("command channel closed after {:?}", start.elapsed());
        self.page
    }

    fn handle(&mut self, command: Command) {
        debug!("command {:?}", command);
        match command {
            Command::Dispatch(event) => {
                self.page.dispatch(event);
            }
            Command::ScrollTo(top) => self.page.scroll_window(top),
            Command::Snapshot => {
                let snapshot = self.page.snapshot();
                if let Some(callback) = &mut self.on_snapshot {
                    callback(&snapshot);
                }
            }
        }
    }
}

async fn sleep_or_forever(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
