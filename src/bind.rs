//! Method-to-callable binder generation.
//!
//! A binder wraps a call to an object's own method into a standalone
//! callable that captures the object, for use as a callback. The family
//! has two arities: `(method)` binds the current receiver (`self` in the
//! surrounding method the emitted text is pasted into), `(receiver,
//! method)` binds an explicit receiver. Which form applies is decided by
//! argument count through the same resolution mechanism every other call
//! family uses.
//!
//! Receiver lifetime contract: the receiver must outlive every invocation
//! of the produced callable. The emitted closure captures the receiver by
//! move; when the receiver is a borrow, the closure is tied to that
//! borrow's lifetime.

use std::fmt::Write;

use thiserror::Error;

use crate::registry::{ImplRegistry, RegistryError};
use crate::resolver::{is_identifier, ArityResolver, ResolveError, MAX_ARITY};
use crate::span::Span;
use crate::token::Argument;

/// The base name the binder's one- and two-argument implementations
/// share.
pub const BINDER_BASE: &str = "bind_fn_impl_";

/// Errors raised while building a binder.
#[derive(Debug, Error)]
pub enum BinderError {
    #[error("`{name}` is not a valid method name")]
    InvalidMethodName { name: String },

    #[error("a binder cannot forward {count} parameters, at most {max} are supported", max = MAX_ARITY)]
    TooManyParameters { count: usize },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// A binder description, ready for emission.
#[derive(Debug, Clone)]
pub struct Binder {
    receiver: Option<String>,
    method: String,
    forwarded: usize,
}

impl Binder {
    /// Creates a binder for an explicit receiver.
    pub fn with_receiver(receiver: &str, method: &str) -> Result<Self, BinderError> {
        Self::build(Some(receiver.to_string()), method)
    }

    /// Creates a binder for the current receiver.
    pub fn for_current_receiver(method: &str) -> Result<Self, BinderError> {
        Self::build(None, method)
    }

    /// Builds a binder from a call-site argument list.
    ///
    /// This is the arity-dispatched entry point: one argument selects the
    /// current-receiver form, two select the explicit-receiver form, and
    /// any other count fails resolution the same way any undefined count
    /// does.
    pub fn from_arguments(span: Span, args: &[Argument]) -> Result<Self, BinderError> {
        let mut registry = ImplRegistry::new();
        registry.register(BINDER_BASE, 1)?;
        registry.register(BINDER_BASE, 2)?;

        let resolver = ArityResolver::new(&registry);
        let call = resolver.resolve(BINDER_BASE, span, args)?;

        match call.arity {
            1 => Self::build(None, &call.args[0].text),
            2 => Self::build(Some(call.args[0].text.clone()), &call.args[1].text),
            _ => unreachable!("binder family defines arities 1 and 2"),
        }
    }

    fn build(receiver: Option<String>, method: &str) -> Result<Self, BinderError> {
        if !is_identifier(method) {
            return Err(BinderError::InvalidMethodName {
                name: method.to_string(),
            });
        }
        Ok(Self {
            receiver,
            method: method.to_string(),
            forwarded: 1,
        })
    }

    /// Sets how many parameters the produced callable forwards.
    pub fn forwarding(mut self, count: usize) -> Result<Self, BinderError> {
        if count > MAX_ARITY {
            return Err(BinderError::TooManyParameters { count });
        }
        self.forwarded = count;
        Ok(self)
    }

    /// Emits the closure that captures the receiver and forwards its
    /// parameters to the bound method.
    pub fn emit(&self) -> String {
        let params: Vec<String> = (0..self.forwarded).map(|i| format!("arg{i}")).collect();
        let params = params.join(", ");
        let method = &self.method;

        let mut out = String::new();
        match &self.receiver {
            Some(receiver) => {
                writeln!(out, "{{").unwrap();
                writeln!(out, "    let handle = {receiver};").unwrap();
                writeln!(out, "    move |{params}| handle.{method}({params})").unwrap();
                write!(out, "}}").unwrap();
            }
            None => {
                write!(out, "move |{params}| self.{method}({params})").unwrap();
            }
        }
        out
    }
}
