//! Tracing advice.

use serde_json::Value;
use tracing::{debug, debug_span};

use crate::chain::Advice;
use crate::error::Result;
use crate::invocation::TargetInfo;

/// Advice that runs the rest of the chain inside a `debug` span.
///
/// The span carries the method name and argument count. The outcome is
/// logged when the continuation returns; the result itself is passed
/// through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Traced;

impl<C> Advice<C> for Traced {
    fn advise(&self, _ctx: &C, info: TargetInfo<'_, C>) -> Result<Value> {
        let span = debug_span!("advised_call", method = info.method(), args = info.args.len());
        let _entered = span.enter();

        let result = info.proceed();
        match &result {
            Ok(_) => debug!("Call returned"),
            Err(e) => debug!(error = %e, "Call failed"),
        }
        result
    }
}
