//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String.

use thiserror::Error;

use crate::value_objects::CapabilityKind;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A capability was attached to a collection of a different kind
    #[error("{expected}s must be {expected} capabilities, got {actual}")]
    TypeMismatch {
        expected: CapabilityKind,
        actual: CapabilityKind,
    },

    /// Parse error (for vocabulary enums)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a type mismatch error for a wrong-kind attach.
    pub fn type_mismatch(expected: CapabilityKind, actual: CapabilityKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
