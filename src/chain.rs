//! Advice chains.
//!
//! Each method slot on a [`Target`](crate::Target) holds a `Link`: either a
//! terminal (the original method, a plain property, or nothing at all) or an
//! advice layer that exclusively owns the next link inward.
//!
//! ```text
//! Advised(outer) -> Advised(inner) -> Original
//! ```
//!
//! Links are built once by the registrar and never mutated afterwards. A new
//! registration moves the current link into a fresh outer layer.

use serde_json::Value;
use tracing::trace;

use crate::error::{AopError, Result};
use crate::invocation::TargetInfo;

/// Ordered argument list passed to methods and advice.
pub type Args = Vec<Value>;

/// A callable method slot.
///
/// Implemented for any `Fn(&C, Args) -> Result<Value>`, where `C` is the
/// receiver type of the target.
pub trait Method<C>: Send + Sync {
    /// Call the method with the given receiver and arguments.
    fn call(&self, ctx: &C, args: Args) -> Result<Value>;
}

impl<C, F> Method<C> for F
where
    F: Fn(&C, Args) -> Result<Value> + Send + Sync,
{
    fn call(&self, ctx: &C, args: Args) -> Result<Value> {
        self(ctx, args)
    }
}

/// Around advice.
///
/// Receives the receiver the wrapped method was invoked with and a
/// [`TargetInfo`] describing the call. The advice decides whether, how often
/// and with which arguments to proceed. Whatever it returns is the result of
/// its layer.
///
/// Implemented for any `Fn(&C, TargetInfo<'_, C>) -> Result<Value>`.
pub trait Advice<C>: Send + Sync {
    /// Run the advice for one invocation.
    fn advise(&self, ctx: &C, info: TargetInfo<'_, C>) -> Result<Value>;
}

impl<C, F> Advice<C> for F
where
    F: Fn(&C, TargetInfo<'_, C>) -> Result<Value> + Send + Sync,
{
    fn advise(&self, ctx: &C, info: TargetInfo<'_, C>) -> Result<Value> {
        self(ctx, info)
    }
}

/// One node of an advice chain.
pub(crate) enum Link<C> {
    /// The unwrapped method.
    Original(Box<dyn Method<C>>),
    /// A slot holding a plain value.
    Property(Value),
    /// Nothing was defined under the name when it was first wrapped.
    Missing,
    /// An advice layer around the next link.
    Advised {
        advice: Box<dyn Advice<C>>,
        next: Box<Link<C>>,
    },
}

impl<C> Link<C> {
    /// Wrap `previous` in a new advice layer.
    pub(crate) fn advised(advice: Box<dyn Advice<C>>, previous: Link<C>) -> Self {
        Link::Advised {
            advice,
            next: Box::new(previous),
        }
    }

    /// Invoke this link with the given receiver and arguments.
    ///
    /// `method` names the slot for error reporting.
    pub(crate) fn invoke(&self, method: &str, ctx: &C, args: Args) -> Result<Value> {
        match self {
            Link::Original(inner) => {
                trace!(method, args = args.len(), "Calling original method");
                inner.call(ctx, args)
            }
            Link::Property(_) => Err(AopError::NotCallable(method.to_string())),
            Link::Missing => Err(AopError::MissingMethod(method.to_string())),
            Link::Advised { advice, next } => {
                trace!(method, args = args.len(), "Entering advice");
                advice.advise(ctx, TargetInfo::new(method, ctx, next, args))
            }
        }
    }

    /// Number of advice layers above the terminal.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 0;
        let mut link = self;
        while let Link::Advised { next, .. } = link {
            depth += 1;
            link = &**next;
        }
        depth
    }

    /// True if invoking this link can reach a callable slot.
    pub(crate) fn is_callable(&self) -> bool {
        matches!(self, Link::Original(_) | Link::Advised { .. })
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Link::Original(_) => "method",
            Link::Property(_) => "property",
            Link::Missing => "missing",
            Link::Advised { .. } => "advised",
        }
    }
}
