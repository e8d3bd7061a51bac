//! # Error Types
//!
//! Domain-specific error types for acme-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acme-core errors (this file)                                          │
//! │  ├── CoreError        - Pricing domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  acme-basket errors (CLI app)                                          │
//! │  └── CliError         - Config I/O, parse errors, wrapped CoreError    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product code is not in the catalogue.
    ///
    /// ## When This Occurs
    /// - `Basket::add` with a code the catalogue doesn't know
    /// - An offer in a pricing config targets a missing product
    ///
    /// ## User Workflow
    /// ```text
    /// basket.add("X99")
    ///      │
    ///      ▼
    /// catalogue lookup: none
    ///      │
    ///      ▼
    /// UnknownProduct("X99")   (basket items untouched)
    ///      │
    ///      ▼
    /// CLI prints: "Unknown product code: X99"
    /// ```
    #[error("Unknown product code: {0}")]
    UnknownProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur while building products, catalogues and delivery tables,
/// before any basket is priced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Ordered values are not strictly increasing.
    #[error("{field} must be strictly increasing: {value} does not follow {previous}")]
    NotAscending {
        field: String,
        previous: i64,
        value: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProduct("X99".to_string());
        assert_eq!(err.to_string(), "Unknown product code: X99");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Duplicate {
            field: "product code".to_string(),
            value: "R01".to_string(),
        };
        assert_eq!(err.to_string(), "product code 'R01' already exists");

        let err = ValidationError::NotAscending {
            field: "delivery threshold".to_string(),
            previous: 5000,
            value: 5000,
        };
        assert_eq!(
            err.to_string(),
            "delivery threshold must be strictly increasing: 5000 does not follow 5000"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: name is required");
    }
}
