//! Event-contract boilerplate generation.
//!
//! Conforming to the event contract means implementing the same three
//! accessors for every event type: a static type tag, a display name,
//! and a category-flags value. This module generates that boilerplate
//! from a type name and a category expression. The contract itself
//! (`Event`, `EventType`, the category flags) stays external: the emitted
//! code refers to those items by name and assumes they are in scope where
//! it is pasted.

use std::fmt::Write;

use thiserror::Error;

use crate::resolver::is_identifier;
use crate::token::{split_arguments, TokenizeError};

/// Errors raised while building an event-class description.
#[derive(Debug, Error)]
pub enum EventClassError {
    #[error("`{name}` is not a valid type name")]
    InvalidTypeName { name: String },

    #[error("invalid category expression: {0}")]
    Category(#[from] TokenizeError),

    #[error("the category must be a single expression, found {count} comma-separated values")]
    CategoryNotSingleExpression { count: usize },
}

/// A type name plus a category expression, ready for emission.
#[derive(Debug, Clone)]
pub struct EventClass {
    type_name: String,
    category: String,
}

impl EventClass {
    /// Validates the descriptor.
    ///
    /// The type name must be an identifier (it doubles as the tag variant
    /// name); the category must lex as exactly one expression.
    pub fn new(type_name: &str, category: &str) -> Result<Self, EventClassError> {
        if !is_identifier(type_name) {
            return Err(EventClassError::InvalidTypeName {
                name: type_name.to_string(),
            });
        }

        let exprs = split_arguments(category)?;
        if exprs.len() != 1 {
            return Err(EventClassError::CategoryNotSingleExpression { count: exprs.len() });
        }

        Ok(Self {
            type_name: type_name.to_string(),
            category: exprs[0].text.clone(),
        })
    }

    /// The type the boilerplate is generated for.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Emits the accessor definitions the contract requires.
    pub fn emit(&self) -> String {
        let ty = &self.type_name;
        let category = &self.category;
        let mut out = String::new();

        // Inherent tag accessor, usable without an instance.
        writeln!(out, "impl {ty} {{").unwrap();
        writeln!(out, "    pub fn static_type() -> EventType {{").unwrap();
        writeln!(out, "        EventType::{ty}").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out, "}}").unwrap();
        writeln!(out).unwrap();

        // The contract accessors.
        writeln!(out, "impl Event for {ty} {{").unwrap();
        writeln!(out, "    fn event_type(&self) -> EventType {{").unwrap();
        writeln!(out, "        Self::static_type()").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "    fn name(&self) -> &'static str {{").unwrap();
        writeln!(out, "        \"{ty}\"").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "    fn category_flags(&self) -> EventCategory {{").unwrap();
        writeln!(out, "        {category}").unwrap();
        writeln!(out, "    }}").unwrap();
        writeln!(out, "}}").unwrap();

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_contains_all_three_accessors() {
        let class = EventClass::new("WindowResize", "EventCategory::APPLICATION").unwrap();
        let emitted = class.emit();

        assert!(emitted.contains("impl WindowResize {"));
        assert!(emitted.contains("pub fn static_type() -> EventType {"));
        assert!(emitted.contains("EventType::WindowResize"));
        assert!(emitted.contains("impl Event for WindowResize {"));
        assert!(emitted.contains("fn event_type(&self) -> EventType {"));
        assert!(emitted.contains("\"WindowResize\""));
        assert!(emitted.contains("EventCategory::APPLICATION"));
    }

    #[test]
    fn test_category_may_be_a_flag_union() {
        let class = EventClass::new(
            "KeyPressed",
            "EventCategory::INPUT | EventCategory::KEYBOARD",
        )
        .unwrap();
        assert!(class
            .emit()
            .contains("EventCategory::INPUT | EventCategory::KEYBOARD"));
    }

    #[test]
    fn test_invalid_type_name_rejected() {
        assert!(matches!(
            EventClass::new("Window Resize", "EventCategory::APPLICATION"),
            Err(EventClassError::InvalidTypeName { .. })
        ));
    }

    #[test]
    fn test_category_must_be_single_expression() {
        assert!(matches!(
            EventClass::new("KeyPressed", "A, B"),
            Err(EventClassError::CategoryNotSingleExpression { count: 2 })
        ));
        assert!(matches!(
            EventClass::new("KeyPressed", ""),
            Err(EventClassError::CategoryNotSingleExpression { count: 0 })
        ));
    }
}
