//! Arity-directed call resolution.
//!
//! This module implements the resolution algorithm that selects which
//! implementation of a call family to invoke based solely on how many
//! arguments were supplied. Given a base name and an argument list, the
//! resolver recovers the argument count, composes the target identifier
//! by joining the base name with the decimal count, and emits a call to
//! that target with the arguments forwarded unchanged.
//!
//! # Algorithm Overview
//!
//! 1. **Count**: recover the argument count by concatenating the argument
//!    slots with a fixed descending sequence and extracting a fixed slot
//! 2. **Check**: confirm the registry defines an implementation for that
//!    count, or fail with the defined counts listed
//! 3. **Compose**: join base name and decimal count into the target
//!    identifier
//! 4. **Emit**: produce the call to the target with the original argument
//!    list, order preserved
//!
//! # Module Structure
//!
//! - [`count`] - The counting table and fixed-slot extraction
//! - [`compose`] - Identifier validation and name composition
//! - [`result`] - Resolution results and errors
//! - [`resolver`] - The resolution algorithm

mod compose;
mod count;
mod resolver;
mod result;


pub use compose::{compose_name, is_identifier};

pub use count::{argument_count, MAX_ARITY, REVERSE_SEQUENCE};

pub use resolver::ArityResolver;

pub use result::{ResolveError, ResolvedCall};
