//! Targets and the `around` registrar.
//!
//! A [`Target`] pairs a receiver with a table of named method slots. Calls go
//! through [`Target::invoke`], which dispatches to whatever link currently
//! occupies the slot: the original method, or the outermost advice layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use around::{around, Args, Target};
//! use serde_json::{json, Value};
//!
//! let mut target = Target::builder(Counter::default())
//!     .method("targetFn", |ctx: &Counter, _args: Args| -> around::Result<Value> {
//!         ctx.bump();
//!         Ok(json!(3))
//!     })
//!     .build();
//!
//! around("targetFn", |ctx, info| around::next(ctx, &info), &mut target);
//!
//! assert_eq!(target.invoke("targetFn", vec![json!("a")])?, json!(3));
//! ```

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::chain::{Advice, Args, Link};
use crate::error::{AopError, Result};
use crate::invocation::TargetInfo;

/// An object whose named methods can be wrapped with around advice.
///
/// `C` is the receiver: every method and advice layer is called with a
/// reference to the same `C` the target owns.
pub struct Target<C> {
    receiver: C,
    slots: HashMap<String, Link<C>>,
}

impl<C> Target<C> {
    /// Create a target with no methods.
    pub fn new(receiver: C) -> Self {
        Self {
            receiver,
            slots: HashMap::new(),
        }
    }

    /// Start building a target with methods and properties.
    pub fn builder(receiver: C) -> TargetBuilder<C> {
        TargetBuilder {
            target: Self::new(receiver),
        }
    }

    /// The receiver passed to methods and advice.
    pub fn receiver(&self) -> &C {
        &self.receiver
    }

    /// Mutable access to the receiver between invocations.
    pub fn receiver_mut(&mut self) -> &mut C {
        &mut self.receiver
    }

    /// Define or replace an unadvised method.
    ///
    /// Fails with [`AopError::AlreadyAdvised`] once advice wraps the name;
    /// the original captured by the chain stays in place.
    pub fn define<F>(&mut self, name: &str, method: F) -> Result<()>
    where
        F: Fn(&C, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.replace_slot(name, Link::Original(Box::new(method)))
    }

    /// Define or replace an unadvised non-callable property.
    pub fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        self.replace_slot(name, Link::Property(value))
    }

    fn replace_slot(&mut self, name: &str, link: Link<C>) -> Result<()> {
        if matches!(self.slots.get(name), Some(Link::Advised { .. })) {
            return Err(AopError::AlreadyAdvised(name.to_string()));
        }
        self.slots.insert(name.to_string(), link);
        Ok(())
    }

    /// Wrap the named method with an advice closure.
    ///
    /// The current slot becomes the next link of the new layer, so the most
    /// recently registered advice is outermost. Nothing is validated here: a
    /// missing or non-callable name fails when the chain proceeds into it.
    pub fn around<F>(&mut self, method_name: &str, advice: F)
    where
        F: Fn(&C, TargetInfo<'_, C>) -> Result<Value> + Send + Sync + 'static,
    {
        self.around_with(method_name, advice);
    }

    /// Wrap the named method with any [`Advice`] implementation.
    pub fn around_with<A>(&mut self, method_name: &str, advice: A)
    where
        A: Advice<C> + 'static,
    {
        let previous = self.slots.remove(method_name).unwrap_or(Link::Missing);
        let link = Link::advised(Box::new(advice), previous);
        let depth = link.depth();
        self.slots.insert(method_name.to_string(), link);
        debug!(method = method_name, depth, "Installed around advice");
    }

    /// Invoke a method by name.
    ///
    /// Runs the outermost advice layer, or the original method when the name
    /// has never been wrapped.
    pub fn invoke(&self, name: &str, args: Args) -> Result<Value> {
        trace!(method = name, args = args.len(), "Invoking");
        let link = self
            .slots
            .get(name)
            .ok_or_else(|| AopError::MissingMethod(name.to_string()))?;
        link.invoke(name, &self.receiver, args)
    }

    /// The value of an unwrapped property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self.slots.get(name) {
            Some(Link::Property(value)) => Some(value),
            _ => None,
        }
    }

    /// True if invoking `name` reaches a method or an advice layer.
    pub fn has_method(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(Link::is_callable)
    }

    /// Number of advice layers installed for `name`.
    pub fn chain_len(&self, name: &str) -> usize {
        self.slots.get(name).map_or(0, Link::depth)
    }

    /// Names of all callable slots, sorted.
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .slots
            .iter()
            .filter(|(_, link)| link.is_callable())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl<C: fmt::Debug> fmt::Debug for Target<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<(&String, &'static str, usize)> = self
            .slots
            .iter()
            .map(|(name, link)| (name, link.kind(), link.depth()))
            .collect();
        slots.sort();
        f.debug_struct("Target")
            .field("receiver", &self.receiver)
            .field("slots", &slots)
            .finish()
    }
}

/// Builder for [`Target`].
pub struct TargetBuilder<C> {
    target: Target<C>,
}

impl<C> TargetBuilder<C> {
    /// Add a method.
    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&C, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.target
            .slots
            .insert(name.into(), Link::Original(Box::new(method)));
        self
    }

    /// Add a non-callable property.
    pub fn property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.target.slots.insert(name.into(), Link::Property(value));
        self
    }

    /// Finish building.
    pub fn build(self) -> Target<C> {
        self.target
    }
}

/// Register one layer of around advice on `target`'s `method_name`.
///
/// Same as [`Target::around`], with the argument order of the classic
/// `around(name, advice, object)` registrar.
pub fn around<C, F>(method_name: &str, advice: F, target: &mut Target<C>)
where
    F: Fn(&C, TargetInfo<'_, C>) -> Result<Value> + Send + Sync + 'static,
{
    target.around(method_name, advice);
}
