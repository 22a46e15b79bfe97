use crate::event::{EventKind, Target};

/// Handle returned by [`Listeners::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Entry<L> {
    id: ListenerId,
    target: Target,
    kind: EventKind,
    listener: L,
}

/// Subscription registry: `(target, event kind) -> listener`.
///
/// `L` is whatever the caller routes on, usually a small `Copy` enum naming
/// the component that subscribed.
#[derive(Debug, Clone)]
pub struct Listeners<L> {
    next_id: u64,
    entries: Vec<Entry<L>>,
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<L: Clone> Listeners<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `kind` events on `target`.
    pub fn on(&mut self, target: Target, kind: EventKind, listener: L) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            target,
            kind,
            listener,
        });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listeners to invoke for a `kind` event travelling along `path`
    /// (target first, then each ancestor). Each hit is paired with the
    /// target it was registered on. Within a target, registration order
    /// is preserved.
    pub fn matching(&self, kind: EventKind, path: &[Target]) -> Vec<(Target, L)> {
        let mut hits = Vec::new();
        for target in path {
            for entry in &self.entries {
                if entry.kind == kind && &entry.target == target {
                    hits.push((target.clone(), entry.listener.clone()));
                }
            }
        }
        hits
    }
}
