//! Resolution results and errors.

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::span::Span;
use crate::token::Argument;

use super::count::MAX_ARITY;

/// A successfully resolved call.
#[derive(Debug, Clone)]
pub struct ResolvedCall {
    /// The base name the call site used.
    pub base: String,
    /// The composed target identifier, e.g. `LOG2`.
    pub target: String,
    /// The recovered argument count.
    pub arity: u8,
    /// The arguments, unchanged and in original order.
    pub args: Vec<Argument>,
}

impl ResolvedCall {
    /// Renders the resolved call as source text, forwarding the original
    /// argument list.
    pub fn render(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(|a| a.text.as_str()).collect();
        format!("{}({})", self.target, args.join(", "))
    }
}

/// Errors raised by resolution. All of them are translation-time; no
/// partial output is produced.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The call site used a count nobody defined an implementation for.
    #[error("no {arity}-argument implementation of `{base}`")]
    UndefinedImplementation {
        base: String,
        arity: u8,
        /// The counts that do have implementations, sorted.
        defined: Vec<u8>,
        span: Span,
    },

    /// More arguments than the counting sequence carries values for.
    #[error("`{base}` was invoked with {count} arguments, but at most {max} are supported", max = MAX_ARITY)]
    ArityOverflow {
        base: String,
        count: usize,
        span: Span,
    },

    /// The base name is not a valid identifier, so no target name can be
    /// composed from it.
    #[error("`{name}` is not a valid base identifier")]
    InvalidBaseName { name: String, span: Span },
}

impl ResolveError {
    /// The call site the error points at.
    pub fn span(&self) -> Span {
        match self {
            ResolveError::UndefinedImplementation { span, .. }
            | ResolveError::ArityOverflow { span, .. }
            | ResolveError::InvalidBaseName { span, .. } => *span,
        }
    }

    /// Converts the error into a reportable diagnostic.
    pub fn into_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::UndefinedImplementation { defined, span, .. } => {
                let diag = Diagnostic::error(self.to_string(), *span)
                    .with_code("undefined-implementation");
                if defined.is_empty() {
                    diag.with_label(*span, "no implementations are defined for this base name")
                } else {
                    let counts: Vec<String> = defined.iter().map(u8::to_string).collect();
                    diag.with_label(
                        *span,
                        format!("implementations are defined for {} arguments", counts.join(", ")),
                    )
                }
            }
            ResolveError::ArityOverflow { span, .. } => Diagnostic::error(self.to_string(), *span)
                .with_code("arity-overflow")
                .with_label(*span, "the counting sequence stops at 9"),
            ResolveError::InvalidBaseName { span, .. } => {
                Diagnostic::error(self.to_string(), *span).with_code("invalid-base-name")
            }
        }
    }
}
