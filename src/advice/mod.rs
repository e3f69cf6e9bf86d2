//! Reusable around advice for cross-cutting concerns.
//!
//! Each type here implements [`Advice`](crate::Advice) for any receiver and
//! is installed with [`Target::around_with`](crate::Target::around_with):
//!
//! ```ignore
//! let mut target = Target::builder(store).method("save", save).build();
//!
//! // Layers apply inside-out: retries happen inside the timing.
//! target.around_with("save", Retry::from_config(&config.retry));
//! target.around_with("save", Instrumented::from_config(&config.instrumentation));
//! target.around_with("save", Traced);
//!
//! target.invoke("save", args)?;
//! ```
//!
//! # Available Advice
//!
//! - [`Traced`] - Runs the call inside a `debug` span and logs its outcome
//! - [`Instrumented`] - Counts calls and failures, flags slow calls
//! - [`Retry`] - Re-runs the inner layers on failure with exponential backoff

mod instrumented;
mod retry;
mod traced;

pub use instrumented::{CallStats, Instrumented};
pub use retry::Retry;
pub use traced::Traced;
