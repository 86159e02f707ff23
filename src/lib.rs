//! Arity-directed call resolution and boilerplate generation.
//!
//! `varity` retrofits overload-on-argument-count onto call families that
//! are really several differently-named implementations: `LOG0()`,
//! `LOG1(msg)`, `LOG2(msg, level)` become one spellable name, with the
//! argument count selecting the implementation. Everything resolves at
//! translation time; nothing in the emitted output costs anything at
//! runtime.
//!
//! The mechanism ships in two forms with the same external contract:
//!
//! - **Generative**: [`ArityResolver`] resolves a base name plus a
//!   tokenized argument list against an [`ImplRegistry`] of defined
//!   `(base, arity)` implementations, and emits the call to the composed
//!   target name. Failures (an undefined count, more than nine
//!   arguments) are structured [`Diagnostic`]s identifying the call
//!   site.
//! - **Declarative**: the [`vcall!`] macro pattern-matches the argument
//!   count directly and composes the target identifier with `paste`.
//!
//! ```text
//! ┌───────────┐   ┌───────┐   ┌─────────┐   ┌──────────────┐
//! │ tokenize  │──►│ count │──►│ compose │──►│ emit call    │
//! │ arguments │   │ 0..=9 │   │ base+N  │   │ target(args) │
//! └───────────┘   └───────┘   └─────────┘   └──────────────┘
//! ```
//!
//! Two companion facilities are built from the same primitives: the
//! event-contract boilerplate generator ([`event_class!`], [`EventClass`])
//! and the method-to-callable binder ([`bind_fn!`], [`Binder`]), the
//! binder being itself a two-arity family dispatched through the
//! resolver.
//!
//! # Example
//!
//! ```
//! use varity::{ArityResolver, ImplRegistry, Span, split_arguments};
//!
//! let mut registry = ImplRegistry::new();
//! registry.register("LOG", 0).unwrap();
//! registry.register("LOG", 1).unwrap();
//! registry.register("LOG", 2).unwrap();
//!
//! let args = split_arguments(r#""error", 5"#).unwrap();
//! let call = ArityResolver::new(&registry)
//!     .resolve("LOG", Span::dummy(), &args)
//!     .unwrap();
//! assert_eq!(call.render(), r#"LOG2("error", 5)"#);
//! ```

pub mod bind;
pub mod diagnostics;
pub mod event;
pub mod macros;
pub mod registry;
pub mod resolver;
pub mod span;
pub mod token;

pub use bind::{Binder, BinderError};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use event::{EventClass, EventClassError};
pub use registry::{ImplRegistry, Manifest, ManifestEntry, RegistryError};
pub use resolver::{
    argument_count, compose_name, is_identifier, ArityResolver, ResolveError, ResolvedCall,
    MAX_ARITY,
};
pub use span::Span;
pub use token::{split_arguments, tokenize, Argument, Token, TokenKind, TokenizeError};

// Re-exported for use in the exported macros.
pub use paste;
