//! Raw event sources.
//!
//! The bus never talks to a window or drawing surface directly. Hosts expose
//! each source as an [`EventTarget`]; listener identity is the `Arc` pointer,
//! so removal must pass the same `Listener` that was added.

use crate::types::{EventKind, RawEvent};
use parking_lot::Mutex;
use std::sync::Arc;

/// Callback registered on a raw source.
pub type Listener = Arc<dyn Fn(&mut RawEvent) + Send + Sync>;

/// Something that delivers raw events to registered listeners.
pub trait EventTarget: Send + Sync {
    fn add_listener(&self, kind: EventKind, listener: Listener);

    /// Remove a listener previously added for `kind`. Unknown listeners are ignored.
    fn remove_listener(&self, kind: EventKind, listener: &Listener);
}

/// The three raw sources a bus subscribes to.
#[derive(Clone)]
pub struct InputSources {
    /// Host window (global pointer-move, pointer-up, key-up)
    pub window: Arc<dyn EventTarget>,
    /// Drawing surface container element
    pub element: Arc<dyn EventTarget>,
    /// Vector-drawing layer inside the element
    pub vector: Arc<dyn EventTarget>,
}

impl InputSources {
    pub fn get(&self, source: SourceKind) -> &Arc<dyn EventTarget> {
        match source {
            SourceKind::Window => &self.window,
            SourceKind::Element => &self.element,
            SourceKind::Vector => &self.vector,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Window,
    Element,
    Vector,
}

/// Listener list for one source.
///
/// Hosts that route their native events through Rust wrap each source in a
/// table and call [`ListenerTable::dispatch`].
#[derive(Default)]
pub struct ListenerTable {
    listeners: Mutex<Vec<(EventKind, Listener)>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every listener registered for the event's kind, in registration order.
    ///
    /// The list is snapshotted first so a listener may add or remove listeners
    /// (including itself) while the event is being delivered.
    pub fn dispatch(&self, event: &mut RawEvent) {
        let kind = event.kind();
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.lock().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl EventTarget for ListenerTable {
    fn add_listener(&self, kind: EventKind, listener: Listener) {
        self.listeners.lock().push((kind, listener));
    }

    fn remove_listener(&self, kind: EventKind, listener: &Listener) {
        let mut listeners = self.listeners.lock();
        if let Some(idx) = listeners
            .iter()
            .position(|(k, l)| *k == kind && Arc::ptr_eq(l, listener))
        {
            listeners.remove(idx);
        }
    }
}
