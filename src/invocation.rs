//! Per-invocation context handed to advice.
//!
//! A [`TargetInfo`] is built fresh each time an advised method is invoked and
//! dropped when the call returns. It carries the arguments as received at
//! that layer and a [`Continuation`] into the next layer inward.

use std::fmt;

use serde_json::Value;

use crate::chain::{Args, Link};
use crate::error::Result;

/// Descriptor passed to advice for a single invocation.
///
/// `args` is public and mutable: the list an advice proceeds with is the
/// list every inner layer and the original method observe.
pub struct TargetInfo<'a, C> {
    method: &'a str,
    ctx: &'a C,
    next: &'a Link<C>,
    /// Arguments as received at this layer.
    pub args: Args,
}

impl<'a, C> TargetInfo<'a, C> {
    pub(crate) fn new(method: &'a str, ctx: &'a C, next: &'a Link<C>, args: Args) -> Self {
        Self {
            method,
            ctx,
            next,
            args,
        }
    }

    /// Name of the advised method.
    pub fn method(&self) -> &'a str {
        self.method
    }

    /// The receiver this layer was invoked with.
    pub fn context(&self) -> &'a C {
        self.ctx
    }

    /// Continue the chain with the current arguments.
    pub fn proceed(&self) -> Result<Value> {
        self.continuation().call(self.args.clone())
    }

    /// Continue the chain with a substitute argument list.
    pub fn proceed_with(&self, args: Args) -> Result<Value> {
        self.continuation().call(args)
    }

    /// The continuation into the next layer.
    ///
    /// Bound to the receiver this layer was invoked with; use
    /// [`Continuation::apply_with`] to thread a receiver explicitly.
    pub fn continuation(&self) -> Continuation<'a, C> {
        Continuation {
            method: self.method,
            ctx: self.ctx,
            link: self.next,
        }
    }
}

impl<C> fmt::Debug for TargetInfo<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetInfo")
            .field("method", &self.method)
            .field("args", &self.args)
            .finish()
    }
}

/// Callable continuation into the next-inner layer of a chain.
///
/// Calling it runs the next advice, or the original method at the innermost
/// layer, and returns whatever that layer returns. It may be called any
/// number of times; each call re-runs every inner layer.
pub struct Continuation<'a, C> {
    method: &'a str,
    ctx: &'a C,
    link: &'a Link<C>,
}

impl<'a, C> Continuation<'a, C> {
    /// Call the next layer with the bound receiver.
    pub fn call(&self, args: Args) -> Result<Value> {
        self.link.invoke(self.method, self.ctx, args)
    }

    /// Call the next layer with an explicit receiver.
    pub fn apply_with(&self, ctx: &C, args: Args) -> Result<Value> {
        self.link.invoke(self.method, ctx, args)
    }

    /// The receiver [`call`](Self::call) uses.
    pub fn context(&self) -> &'a C {
        self.ctx
    }
}

impl<C> Clone for Continuation<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Continuation<'_, C> {}

impl<C> fmt::Debug for Continuation<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("method", &self.method)
            .field("link", &self.link.kind())
            .finish()
    }
}

/// Proceed to the next layer with an explicit receiver.
///
/// Forwards `info.args` unchanged. Advice that hands its continuation through
/// helpers can call this with its own receiver to guarantee the original
/// method sees it.
///
/// ```rust,ignore
/// target.around("save", |ctx, info| around::next(ctx, &info));
/// ```
pub fn next<C>(ctx: &C, info: &TargetInfo<'_, C>) -> Result<Value> {
    info.continuation().apply_with(ctx, info.args.clone())
}
