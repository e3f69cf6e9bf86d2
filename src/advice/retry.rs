//! Retry advice.

use std::thread;

use backon::BackoffBuilder;
use serde_json::Value;
use tracing::warn;

use crate::chain::Advice;
use crate::config::RetryConfig;
use crate::error::{AopError, Result};
use crate::invocation::TargetInfo;

/// Advice that re-runs the inner layers when they fail.
///
/// Each retry proceeds again, so every inner advice and the original method
/// execute once per attempt. Delays follow an exponential backoff built from
/// [`RetryConfig`]; the calling thread sleeps between attempts. Once the
/// backoff is exhausted the last error is returned.
///
/// Only errors accepted by the predicate are retried (default: invocation
/// errors). Registration errors are never retried.
#[derive(Debug, Clone)]
pub struct Retry {
    config: RetryConfig,
    retryable: fn(&AopError) -> bool,
}

impl Retry {
    /// Retry with default backoff settings.
    pub fn new() -> Self {
        Self::from_config(&RetryConfig::default())
    }

    /// Retry with backoff settings from configuration.
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            config: config.clone(),
            retryable: AopError::is_invocation_error,
        }
    }

    /// Only retry errors for which `predicate` returns true.
    pub fn when(mut self, predicate: fn(&AopError) -> bool) -> Self {
        self.retryable = predicate;
        self
    }

    fn should_retry(&self, err: &AopError) -> bool {
        !err.is_registration_error() && (self.retryable)(err)
    }
}

impl Default for Retry {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Advice<C> for Retry {
    fn advise(&self, _ctx: &C, info: TargetInfo<'_, C>) -> Result<Value> {
        let mut delays = self.config.backoff().build();
        let mut attempt: u32 = 1;

        loop {
            match info.proceed() {
                Ok(value) => return Ok(value),
                Err(e) if self.should_retry(&e) => match delays.next() {
                    Some(delay) => {
                        warn!(
                            method = info.method(),
                            attempt,
                            error = %e,
                            "Advised call failed, retrying in {:?}",
                            delay
                        );
                        thread::sleep(delay);
                        attempt += 1;
                    }
                    None => return Err(e),
                },
                Err(e) => return Err(e),
            }
        }
    }
}
