//! The input event bus - one per editor instance.
//!
//! The bus owns its publish/subscribe channel, its gesture state and a
//! handler registry built at construction. Constructing a bus touches no
//! event source; the owning editor calls [`InputEventBus::attach`] to start
//! receiving raw events and [`InputEventBus::detach`] (or drops the bus) to
//! stop.

use crate::emitter::{Emitter, SubscriptionId};
use crate::error::{BusError, BusResult};
use crate::events::{EventName, InputEvent};
use crate::input::BusState;
use crate::perf::{DispatchMonitor, DispatchStats};
use crate::settings::BusSettings;
use crate::subscription::HandlerRegistry;
use crate::target::InputSources;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// State shared between the bus and the listeners it registers.
pub(crate) struct BusInner {
    state: Mutex<BusState>,
    emitter: Emitter,
    settings: BusSettings,
    monitor: Mutex<DispatchMonitor>,
}

impl BusInner {
    fn new(settings: BusSettings) -> Self {
        Self {
            state: Mutex::new(BusState::new()),
            emitter: Emitter::new(),
            settings,
            monitor: Mutex::new(DispatchMonitor::new()),
        }
    }

    pub(crate) fn state(&self) -> BusState {
        *self.state.lock()
    }

    /// Apply `f` and return a snapshot; the lock is released before emission.
    pub(crate) fn update_state(&self, f: impl FnOnce(&mut BusState)) -> BusState {
        let mut state = self.state.lock();
        f(&mut state);
        *state
    }

    pub(crate) fn publish(&self, event: InputEvent) {
        if self.settings.trace_events {
            trace!(
                event_name = %event.name(),
                default_prevented = event.raw().default_prevented(),
                dir = ?event.direction(),
                "Publishing input event"
            );
        }
        self.emitter.emit(&event);
    }

    pub(crate) fn record_dispatch(&self, handler: &'static str, elapsed_ms: f64) {
        self.monitor.lock().record(handler, elapsed_ms);
    }
}

pub struct InputEventBus {
    inner: Arc<BusInner>,
    sources: InputSources,
    registry: HandlerRegistry,
    attached: Mutex<bool>,
}

impl InputEventBus {
    pub fn new(sources: InputSources, settings: BusSettings) -> Self {
        let inner = Arc::new(BusInner::new(settings));
        let registry = HandlerRegistry::new(&inner);
        Self {
            inner,
            sources,
            registry,
            attached: Mutex::new(false),
        }
    }

    pub fn with_default_settings(sources: InputSources) -> Self {
        Self::new(sources, BusSettings::default())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Register every raw handler on the window, element and vector layer.
    pub fn attach(&self) -> BusResult<()> {
        let mut attached = self.attached.lock();
        if *attached {
            warn!("Input bus attach() called while already attached");
            return Err(BusError::AlreadyAttached);
        }
        self.registry.bind(&self.sources);
        *attached = true;
        debug!(bindings = self.registry.len(), "Input bus attached");
        Ok(())
    }

    /// Remove every raw handler registered by [`attach`](Self::attach).
    ///
    /// Events the host already scheduled may still reach a handler.
    pub fn detach(&self) -> BusResult<()> {
        let mut attached = self.attached.lock();
        if !*attached {
            warn!("Input bus detach() called while not attached");
            return Err(BusError::NotAttached);
        }
        self.registry.unbind(&self.sources);
        *attached = false;
        debug!(bindings = self.registry.len(), "Input bus detached");
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        *self.attached.lock()
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    // ========================================================================
    // Publish/subscribe (delegates to the owned emitter)
    // ========================================================================

    pub fn on<F>(&self, name: EventName, handler: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.inner.emitter.on(name, handler)
    }

    pub fn once<F>(&self, name: EventName, handler: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        self.inner.emitter.once(name, handler)
    }

    pub fn off(&self, name: EventName, id: SubscriptionId) -> bool {
        self.inner.emitter.off(name, id)
    }

    pub fn remove_all_listeners(&self, name: Option<EventName>) {
        self.inner.emitter.remove_all(name);
    }

    pub fn listener_count(&self, name: EventName) -> usize {
        self.inner.emitter.listener_count(name)
    }

    /// Publish an event to subscribers as if the bus had produced it.
    pub fn emit(&self, event: &InputEvent) -> bool {
        self.inner.emitter.emit(event)
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Snapshot of the current gesture state.
    pub fn state(&self) -> BusState {
        self.inner.state()
    }

    pub fn settings(&self) -> &BusSettings {
        &self.inner.settings
    }

    /// Timing for one handler, keyed by binding name (e.g. `"pointer_move"`).
    pub fn dispatch_stats(&self, handler: &str) -> Option<DispatchStats> {
        self.inner.monitor.lock().get(handler).cloned()
    }

    pub fn log_dispatch_summary(&self) {
        self.inner.monitor.lock().log_summary();
    }
}

impl Drop for InputEventBus {
    fn drop(&mut self) {
        if *self.attached.get_mut() {
            self.registry.unbind(&self.sources);
            debug!("Input bus detached on drop");
        }
    }
}
