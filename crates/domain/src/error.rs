//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Banked XP balance is too low for the requested operation
    #[error("Insufficient banked XP: {available} available, {requested} requested")]
    InsufficientBalance { available: i64, requested: i64 },

    /// Downtime pool is too low for the requested spend
    #[error("Insufficient downtime: {available} days available, {requested} requested")]
    InsufficientDowntime { available: i64, requested: i64 },
}

impl DomainError {
    /// Creates a validation error for malformed field values.
    ///
    /// Use this when inputs fail structural checks:
    /// - Required fields are empty or missing
    /// - Values are outside allowed ranges
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a constraint error for business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - State transitions are invalid
    /// - A roster already contains the character being added
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::not_found("Mission", "abc123");
        assert_eq!(err.to_string(), "Entity not found: Mission with id abc123");

        let err = DomainError::InsufficientDowntime {
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient downtime: 2 days available, 5 requested"
        );
    }
}
