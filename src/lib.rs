//! Around advice for named methods.
//!
//! A [`Target`] owns a receiver and a table of named methods. [`around`]
//! wraps one of those methods with advice; registering again for the same
//! name adds another, outer, layer. Advice receives a [`TargetInfo`] and
//! decides whether, how often and with which arguments to proceed to the
//! next layer, and ultimately the original method.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use around::{around, next, Args, Target};
//! use serde_json::{json, Value};
//!
//! let mut target = Target::builder(Log::default())
//!     .method("targetFn", |log: &Log, args: Args| -> around::Result<Value> {
//!         log.push("targetFn");
//!         Ok(json!(3))
//!     })
//!     .build();
//!
//! // Inner layer: forward with the explicit receiver.
//! around("targetFn", |log, info| next(log, &info), &mut target);
//!
//! // Outer layer: record before and after the rest of the chain.
//! around(
//!     "targetFn",
//!     |log: &Log, info| {
//!         log.push("start");
//!         let result = info.proceed();
//!         log.push("end");
//!         result
//!     },
//!     &mut target,
//! );
//!
//! assert_eq!(target.invoke("targetFn", vec![json!("a")])?, json!(3));
//! ```
//!
//! # Reusable Advice
//!
//! The [`advice`] module provides tracing, instrumentation and retry advice
//! configured through [`config::Config`].

pub mod advice;
pub mod chain;
pub mod config;
pub mod error;
pub mod invocation;
pub mod target;
pub mod utils;

// Re-export main types at crate root
pub use chain::{Advice, Args, Method};
pub use error::{AopError, Result};
pub use invocation::{next, Continuation, TargetInfo};
pub use target::{around, Target, TargetBuilder};
