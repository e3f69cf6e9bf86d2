//! Settings for the reusable advice in [`crate::advice`].

use std::time::Duration;

use backon::ExponentialBuilder;
use serde::Deserialize;

/// Default delay before the first retry, in milliseconds.
pub const DEFAULT_RETRY_MIN_DELAY_MS: u64 = 10;

/// Default cap on the delay between retries, in milliseconds.
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 2_000;

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRY_MAX_TIMES: usize = 3;

/// Default duration above which an instrumented call is logged as slow.
pub const DEFAULT_SLOW_CALL_THRESHOLD_MS: u64 = 100;

/// Backoff settings for [`Retry`](crate::advice::Retry) advice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Delay before the first retry.
    ///
    /// Default: 10 ms.
    pub min_delay_ms: u64,

    /// Upper bound on any single delay.
    ///
    /// Default: 2,000 ms.
    pub max_delay_ms: u64,

    /// Retries after the first attempt. 0 disables retrying.
    ///
    /// Default: 3.
    pub max_times: usize,

    /// Randomize delays to spread out retries.
    ///
    /// Default: true.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: DEFAULT_RETRY_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
            max_times: DEFAULT_RETRY_MAX_TIMES,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Retry without sleeping between attempts.
    pub fn immediate(max_times: usize) -> Self {
        Self {
            min_delay_ms: 0,
            max_delay_ms: 0,
            max_times,
            jitter: false,
        }
    }

    /// Build the exponential backoff these settings describe.
    pub fn backoff(&self) -> ExponentialBuilder {
        let builder = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.min_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
            .with_max_times(self.max_times);
        if self.jitter {
            builder.with_jitter()
        } else {
            builder
        }
    }
}

/// Settings for [`Instrumented`](crate::advice::Instrumented) advice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstrumentationConfig {
    /// Calls slower than this are logged at `warn`.
    ///
    /// Default: 100 ms.
    pub slow_call_threshold_ms: u64,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            slow_call_threshold_ms: DEFAULT_SLOW_CALL_THRESHOLD_MS,
        }
    }
}

impl InstrumentationConfig {
    /// The slow-call threshold as a [`Duration`].
    pub fn slow_call_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_call_threshold_ms)
    }
}
