//! Shared test context for advice scenarios.

use around::{AopError, Args, Target, TargetInfo};
use cucumber::World;
use serde_json::{json, Value};
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

/// Receiver that records what happens during a call.
#[derive(Debug, Default)]
pub struct Probe {
    points: Mutex<Vec<String>>,
    received: Mutex<Vec<Value>>,
    receivers: Mutex<Vec<usize>>,
}

impl Probe {
    pub fn push(&self, point: impl Into<String>) {
        self.points.lock().unwrap().push(point.into());
    }

    pub fn points(&self) -> Vec<String> {
        self.points.lock().unwrap().clone()
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn receivers(&self) -> Vec<usize> {
        self.receivers.lock().unwrap().clone()
    }

    /// Called by target methods to record the invocation.
    pub fn record_call(&self, name: &str, args: Args) {
        self.push(name);
        *self.received.lock().unwrap() = args;
        self.receivers
            .lock()
            .unwrap()
            .push(self as *const Probe as usize);
    }
}

/// Test context for advice scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct AdviceWorld {
    pub target: Target<Probe>,
    pub advice_runs: Arc<AtomicUsize>,
    pub last_result: Option<Result<Value, AopError>>,
}

impl AdviceWorld {
    fn new() -> Self {
        Self {
            target: Target::new(Probe::default()),
            advice_runs: Arc::new(AtomicUsize::new(0)),
            last_result: None,
        }
    }

    pub fn result(&self) -> &Result<Value, AopError> {
        self.last_result
            .as_ref()
            .expect("no call has been made in this scenario")
    }
}

/// Split a comma-separated list, dropping empty entries.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list into string arguments.
pub fn parse_args(list: &str) -> Args {
    split_list(list).into_iter().map(|item| json!(item)).collect()
}

/// Advice that records its start and end around the rest of the chain.
pub fn wrapping(
    id: String,
) -> impl Fn(&Probe, TargetInfo<'_, Probe>) -> around::Result<Value> + Send + Sync + 'static {
    move |probe, info| {
        probe.push(format!("start {id}"));
        let result = info.proceed();
        probe.push(format!("end {id}"));
        result
    }
}
