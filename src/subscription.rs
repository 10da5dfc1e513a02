//! Handler registry - the fixed set of raw subscriptions a bus owns.
//!
//! The registry is built once, when the bus is constructed. Each binding
//! holds the exact `Listener` that `bind` registers, so `unbind` removes the
//! same source/kind/listener triple and teardown is always symmetric.

use crate::bus::BusInner;
use crate::perf::measure;
use crate::target::{InputSources, Listener, SourceKind};
use crate::types::{EventKind, RawEvent};
use std::sync::{Arc, Weak};

type HandlerFn = fn(&BusInner, &mut RawEvent);

/// Raw subscriptions, in registration order.
const BINDINGS: [(&str, SourceKind, EventKind, HandlerFn); 9] = [
    ("draw_click", SourceKind::Vector, EventKind::Click, BusInner::handle_draw_click),
    ("draw_mousedown", SourceKind::Vector, EventKind::PointerDown, BusInner::handle_draw_mousedown),
    ("pointer_down", SourceKind::Element, EventKind::PointerDown, BusInner::handle_pointer_down),
    ("svg_mousedown", SourceKind::Vector, EventKind::PointerDown, BusInner::handle_svg_mousedown),
    ("pointer_move", SourceKind::Window, EventKind::PointerMove, BusInner::handle_pointer_move),
    ("pointer_up", SourceKind::Window, EventKind::PointerUp, BusInner::handle_pointer_up),
    ("wheel", SourceKind::Element, EventKind::Wheel, BusInner::handle_wheel),
    ("context_menu", SourceKind::Vector, EventKind::ContextMenu, BusInner::handle_context_menu),
    ("key_up", SourceKind::Window, EventKind::KeyUp, BusInner::handle_key_up),
];

/// One source/kind pair and the listener registered for it.
pub struct Binding {
    name: &'static str,
    source: SourceKind,
    kind: EventKind,
    listener: Listener,
}

impl Binding {
    /// Handler name, also the key for dispatch statistics
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

pub struct HandlerRegistry {
    bindings: Vec<Binding>,
}

impl HandlerRegistry {
    pub(crate) fn new(inner: &Arc<BusInner>) -> Self {
        let bindings = BINDINGS
            .iter()
            .map(|&(name, source, kind, handler)| Binding {
                name,
                source,
                kind,
                listener: listener_for(Arc::downgrade(inner), name, handler),
            })
            .collect();
        Self { bindings }
    }

    pub fn bind(&self, sources: &InputSources) {
        for binding in &self.bindings {
            sources
                .get(binding.source)
                .add_listener(binding.kind, Arc::clone(&binding.listener));
        }
    }

    pub fn unbind(&self, sources: &InputSources) {
        for binding in &self.bindings {
            sources
                .get(binding.source)
                .remove_listener(binding.kind, &binding.listener);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Wrap a handler so it times itself and becomes a no-op once the bus is gone.
///
/// The recorded time covers the whole handler, including the subscriber
/// callbacks it publishes to synchronously.
fn listener_for(inner: Weak<BusInner>, name: &'static str, handler: HandlerFn) -> Listener {
    Arc::new(move |event: &mut RawEvent| {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let ((), elapsed_ms) = measure(|| handler(&inner, event));
        inner.record_dispatch(name, elapsed_ms);
    })
}
