//! OTel-native metrics instruments.
//!
//! Instruments are lazily initialized and feature-gated behind `otel`.
//! Naming follows OTel semantic conventions (dot-separated).

use std::sync::LazyLock;
use std::time::Duration;

use opentelemetry::metrics::{Counter, Histogram, Meter};
use opentelemetry::{global, KeyValue};

static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("around"));

// ============================================================================
// Advised Calls
// ============================================================================

/// Duration of calls through instrumented advice.
pub static CALL_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("around.call.duration")
        .with_description("Advised call duration")
        .with_unit("s")
        .build()
});

/// Total calls through instrumented advice.
pub static CALL_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("around.call.total")
        .with_description("Total advised calls")
        .build()
});

// ============================================================================
// Helper
// ============================================================================

/// Create a method label.
pub fn method_attr(method: &str) -> KeyValue {
    KeyValue::new("method", method.to_string())
}

/// Create an outcome label.
pub fn outcome_attr(outcome: &str) -> KeyValue {
    KeyValue::new("outcome", outcome.to_string())
}

/// Record one advised call.
pub fn record_call(method: &str, elapsed: Duration, ok: bool) {
    let attrs = [
        method_attr(method),
        outcome_attr(if ok { "ok" } else { "error" }),
    ];
    CALL_DURATION.record(elapsed.as_secs_f64(), &attrs);
    CALL_TOTAL.add(1, &attrs);
}
