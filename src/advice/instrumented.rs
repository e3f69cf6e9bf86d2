//! Instrumentation advice.
//!
//! Measures advised calls without modifying the methods they wrap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::warn;

use crate::chain::Advice;
use crate::config::InstrumentationConfig;
use crate::error::Result;
use crate::invocation::TargetInfo;

/// Call and failure counters shared between [`Instrumented`] and its owner.
#[derive(Debug, Default)]
pub struct CallStats {
    calls: AtomicU64,
    failures: AtomicU64,
}

impl CallStats {
    /// Calls that reached this advice.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Calls whose continuation returned an error.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Advice that counts and times every call through it.
///
/// Calls slower than the configured threshold are logged at `warn`. With the
/// `otel` feature, each call is also recorded as:
/// - `around.call.total` - Calls (by method, outcome)
/// - `around.call.duration` - Call latency in seconds (by method, outcome)
///
/// # Example
///
/// ```ignore
/// let instrumented = Instrumented::new();
/// let stats = instrumented.stats();
/// target.around_with("save", instrumented);
/// target.invoke("save", args)?;
/// assert_eq!(stats.calls(), 1);
/// ```
#[derive(Debug)]
pub struct Instrumented {
    slow_call_threshold: Duration,
    stats: Arc<CallStats>,
}

impl Instrumented {
    /// Instrumentation with default thresholds.
    pub fn new() -> Self {
        Self::from_config(&InstrumentationConfig::default())
    }

    /// Instrumentation with thresholds from configuration.
    pub fn from_config(config: &InstrumentationConfig) -> Self {
        Self {
            slow_call_threshold: config.slow_call_threshold(),
            stats: Arc::new(CallStats::default()),
        }
    }

    /// Set the slow-call threshold.
    pub fn with_slow_call_threshold(mut self, threshold: Duration) -> Self {
        self.slow_call_threshold = threshold;
        self
    }

    /// Handle to the counters, usable after the advice is installed.
    pub fn stats(&self) -> Arc<CallStats> {
        self.stats.clone()
    }
}

impl Default for Instrumented {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Advice<C> for Instrumented {
    fn advise(&self, _ctx: &C, info: TargetInfo<'_, C>) -> Result<Value> {
        let start = Instant::now();

        let result = info.proceed();

        let elapsed = start.elapsed();
        self.stats.calls.fetch_add(1, Ordering::Relaxed);
        if result.is_err() {
            self.stats.failures.fetch_add(1, Ordering::Relaxed);
        }

        if elapsed > self.slow_call_threshold {
            warn!(
                method = info.method(),
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "Slow advised call"
            );
        }

        #[cfg(feature = "otel")]
        crate::utils::metrics::record_call(info.method(), elapsed, result.is_ok());

        result
    }
}
