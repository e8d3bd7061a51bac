//! # Validation Module
//!
//! Input validation for catalogue entries and delivery tables.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config parsing (serde/toml in the CLI)                       │
//! │  └── Shape and type checks                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (Product::new, Catalogue::new, DeliveryRule::new)│
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Basket::add                                                  │
//! │  └── Catalogue membership                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::validation::{validate_product_code, validate_price_cents};
//!
//! assert!(validate_product_code("R01").is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_BASKET_ITEMS, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product code accepted.
pub const MAX_CODE_LEN: usize = 50;

/// Longest product name accepted.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_product_code;
///
/// assert!(validate_product_code("B01").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code("R 01").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_PRICE_CENTS ($1,000,000)
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(3295).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    validate_amount("price", cents)
}

/// Validates a delivery fee in cents. Same rule as prices.
pub fn validate_fee_cents(cents: i64) -> ValidationResult<()> {
    validate_amount("delivery fee", cents)
}

fn validate_amount(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates that a basket holding `current_items` can take one more.
///
/// ## Rules
/// - Must stay below MAX_BASKET_ITEMS (10,000)
pub fn validate_basket_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_BASKET_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "basket items".to_string(),
            min: 0,
            max: MAX_BASKET_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates delivery tier thresholds.
///
/// ## Rules
/// - At least one tier
/// - The first threshold is 0 (every subtotal falls in some tier)
/// - Thresholds strictly increase (ranges never overlap)
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_thresholds;
///
/// assert!(validate_thresholds(&[0, 5000, 9000]).is_ok());
/// assert!(validate_thresholds(&[]).is_err());
/// assert!(validate_thresholds(&[100, 5000]).is_err());
/// assert!(validate_thresholds(&[0, 9000, 5000]).is_err());
/// ```
pub fn validate_thresholds(thresholds: &[i64]) -> ValidationResult<()> {
    let Some(&first) = thresholds.first() else {
        return Err(ValidationError::Required {
            field: "delivery tiers".to_string(),
        });
    };

    if first != 0 {
        return Err(ValidationError::InvalidFormat {
            field: "delivery tiers".to_string(),
            reason: format!("first threshold must be 0, got {first}"),
        });
    }

    for pair in thresholds.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ValidationError::NotAscending {
                field: "delivery threshold".to_string(),
                previous: pair[0],
                value: pair[1],
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
