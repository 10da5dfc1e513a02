//! Publish/subscribe channel for semantic events.
//!
//! Handlers run synchronously, in registration order, on the thread that
//! emits. The handler list is copied out of the lock before any handler
//! runs, so handlers may subscribe, unsubscribe or emit without deadlocking.

use crate::events::{EventName, InputEvent};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub type Handler = Arc<dyn Fn(&InputEvent) + Send + Sync>;

/// Token returned by [`Emitter::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Entry {
    id: SubscriptionId,
    handler: Handler,
    once: bool,
}

#[derive(Default)]
pub struct Emitter {
    handlers: Mutex<HashMap<EventName, Vec<Entry>>>,
    next_id: AtomicU64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&self, name: EventName, handler: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(handler), false)
    }

    /// Subscribe for a single delivery; the handler is removed before it runs.
    pub fn once<F>(&self, name: EventName, handler: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(handler), true)
    }

    fn insert(&self, name: EventName, handler: Handler, once: bool) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .lock()
            .entry(name)
            .or_default()
            .push(Entry { id, handler, once });
        id
    }

    /// Returns false if `id` was not subscribed to `name`.
    pub fn off(&self, name: EventName, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock();
        let Some(entries) = handlers.get_mut(&name) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            handlers.remove(&name);
        }
        removed
    }

    /// Drop every handler for `name`, or for all names when `None`.
    pub fn remove_all(&self, name: Option<EventName>) {
        let mut handlers = self.handlers.lock();
        match name {
            Some(name) => {
                handlers.remove(&name);
            }
            None => handlers.clear(),
        }
    }

    pub fn listener_count(&self, name: EventName) -> usize {
        self.handlers.lock().get(&name).map_or(0, Vec::len)
    }

    /// Deliver `event` to every handler of its name.
    ///
    /// Returns true if the event had handlers.
    pub fn emit(&self, event: &InputEvent) -> bool {
        let name = event.name();
        let snapshot: Vec<Handler> = {
            let mut handlers = self.handlers.lock();
            let Some(entries) = handlers.get_mut(&name) else {
                return false;
            };
            let snapshot = entries.iter().map(|e| Arc::clone(&e.handler)).collect();
            entries.retain(|e| !e.once);
            if entries.is_empty() {
                handlers.remove(&name);
            }
            snapshot
        };

        for handler in &snapshot {
            handler(event);
        }
        !snapshot.is_empty()
    }
}
