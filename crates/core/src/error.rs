//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic model failures (wrong variant, validation,
/// lookups). Presentation concerns belong in the driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value of the wrong variant was passed where a specific kind is required
    /// (e.g. a non-wheel fitted as a wheel, a non-vehicle added to a dealership).
    #[error("type constraint violated: expected {expected}, found {found}")]
    TypeConstraint {
        expected: &'static str,
        found: &'static str,
    },

    /// A value failed validation (e.g. blank owner name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested model object was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn type_constraint(expected: &'static str, found: &'static str) -> Self {
        Self::TypeConstraint { expected, found }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// True for the wrong-variant failure raised by type-constrained operations.
    pub fn is_type_constraint(&self) -> bool {
        matches!(self, Self::TypeConstraint { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_constraint_message_names_both_kinds() {
        let err = DomainError::type_constraint("Wheel", "Engine");
        assert!(err.is_type_constraint());
        assert_eq!(
            err.to_string(),
            "type constraint violated: expected Wheel, found Engine"
        );
    }

    #[test]
    fn validation_is_not_a_type_constraint() {
        let err = DomainError::validation("owner cannot be empty");
        assert!(!err.is_type_constraint());
        assert_eq!(err.to_string(), "validation failed: owner cannot be empty");
    }
}
