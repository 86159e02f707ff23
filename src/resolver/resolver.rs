//! The resolution algorithm.

use crate::registry::ImplRegistry;
use crate::span::Span;
use crate::token::Argument;

use super::compose::{compose_name, is_identifier};
use super::count::argument_count;
use super::result::{ResolveError, ResolvedCall};

/// Resolves call sites against a registry of defined implementations.
///
/// Resolution is a pure function of `(base name, argument list)` and the
/// registry: no state is retained between invocations, and identical
/// inputs always resolve to the same target.
pub struct ArityResolver<'a> {
    registry: &'a ImplRegistry,
}

impl<'a> ArityResolver<'a> {
    /// Creates a resolver over a registry.
    pub fn new(registry: &'a ImplRegistry) -> Self {
        Self { registry }
    }

    /// Resolves one call site.
    ///
    /// `span` locates the call site in whatever input the caller holds;
    /// it is carried into any error so diagnostics can point at the
    /// offending invocation.
    pub fn resolve(
        &self,
        base: &str,
        span: Span,
        args: &[Argument],
    ) -> Result<ResolvedCall, ResolveError> {
        if !is_identifier(base) {
            return Err(ResolveError::InvalidBaseName {
                name: base.to_string(),
                span,
            });
        }

        let arity = argument_count(args.len()).ok_or_else(|| ResolveError::ArityOverflow {
            base: base.to_string(),
            count: args.len(),
            span,
        })?;

        if !self.registry.contains(base, arity) {
            return Err(ResolveError::UndefinedImplementation {
                base: base.to_string(),
                arity,
                defined: self.registry.defined_arities(base),
                span,
            });
        }

        Ok(ResolvedCall {
            base: base.to_string(),
            target: compose_name(base, arity),
            arity,
            args: args.to_vec(),
        })
    }
}
