//! Dispatch timing for input handlers.
//!
//! Every raw event passes through exactly one bus handler, so the handler is
//! the natural unit to time. The bus records per-handler statistics in a
//! [`DispatchMonitor`]; the [`profile_scope!`] macro adds finer-grained
//! timers inside hot handlers when the `profiling` feature is enabled.
//!
//! ```ignore
//! use canvas_input::profile_scope;
//!
//! fn handle_pointer_move() {
//!     profile_scope!("pointer_move");
//!     // ... state update and emission ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{debug, warn};
#[cfg(feature = "profiling")]
use tracing::trace;

use crate::constants::SLOW_DISPATCH_MS;

/// Number of samples to keep per handler
const STATS_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Dispatch Statistics
// ============================================================================

/// Rolling timing statistics for one handler.
#[derive(Debug, Clone)]
pub struct DispatchStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for DispatchStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl DispatchStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Total dispatches recorded, including those rolled out of the window
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Average over the recent window.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// 95th percentile over the recent window.
    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }
}

/// Per-handler dispatch statistics, keyed by handler name.
#[derive(Debug, Default)]
pub struct DispatchMonitor {
    stats: HashMap<&'static str, DispatchStats>,
}

impl DispatchMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatch; slow ones are reported immediately. A slow
    /// subscriber shows up against the handler that published to it.
    pub fn record(&mut self, handler: &'static str, elapsed_ms: f64) {
        if elapsed_ms > SLOW_DISPATCH_MS {
            warn!(
                handler,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Slow input dispatch"
            );
        }
        self.stats.entry(handler).or_default().record(elapsed_ms);
    }

    pub fn get(&self, handler: &str) -> Option<&DispatchStats> {
        self.stats.get(handler)
    }

    pub fn log_summary(&self) {
        let mut handlers: Vec<_> = self.stats.iter().collect();
        handlers.sort_by(|a, b| {
            b.1.average()
                .partial_cmp(&a.1.average())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!("Input dispatch summary:");
        for (name, stats) in handlers {
            debug!(
                "  {}: avg={:.3}ms, p95={:.3}ms, max={:.3}ms, count={}",
                name,
                stats.average(),
                stats.p95(),
                stats.max_ms,
                stats.count
            );
        }
    }

    pub fn reset(&mut self) {
        self.stats.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when over threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with a low (0.5ms) threshold for profiling builds.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.5)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
