//! Change subscriptions.

use super::StoreState;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Listener = Arc<dyn Fn(&StoreState) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Listeners {
    entries: Mutex<ListenerTable>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: Listener) -> u64 {
        let mut table = self.entries.lock();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: u64) -> bool {
        let mut table = self.entries.lock();
        let before = table.entries.len();
        table.entries.retain(|(entry, _)| *entry != id);
        table.entries.len() != before
    }

    /// Copies the current listeners so they can be called without the lock.
    pub(crate) fn current(&self) -> Vec<Listener> {
        self.entries.lock()
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().entries.len()
    }
}

/// Handle for a store listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub(crate) fn new(id: u64, listeners: &Arc<Listeners>) -> Self {
        Self {
            id,
            listeners: Arc::downgrade(listeners),
        }
    }

    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
