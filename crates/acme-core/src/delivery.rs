//! # Delivery Rule
//!
//! Maps a (post-discount) basket subtotal to a delivery fee.
//!
//! ## Default Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal         fee                                                   │
//! │  ───────────────  ──────                                                │
//! │  [0, 50)          $4.95                                                 │
//! │  [50, 90)         $2.95                                                 │
//! │  [90, ∞)          $0.00                                                 │
//! │                                                                         │
//! │  Lower bounds are inclusive: exactly $50.00 pays $2.95,                │
//! │  exactly $90.00 ships free.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_fee_cents, validate_thresholds};

/// One row of the delivery table: subtotals from `min_subtotal` up to the
/// next tier's threshold pay `fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub min_subtotal: Money,
    pub fee: Money,
}

impl DeliveryTier {
    pub const fn new(min_subtotal: Money, fee: Money) -> Self {
        DeliveryTier { min_subtotal, fee }
    }
}

/// Tiered delivery fee table.
///
/// Tiers are sorted by threshold, start at zero and never overlap; this is
/// checked once in [`DeliveryRule::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRule {
    tiers: Vec<DeliveryTier>,
}

impl DeliveryRule {
    /// Builds a rule from tiers ordered by `min_subtotal`.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{DeliveryRule, DeliveryTier, Money};
    ///
    /// let rule = DeliveryRule::new(vec![
    ///     DeliveryTier::new(Money::zero(), Money::from_cents(500)),
    ///     DeliveryTier::new(Money::from_cents(2000), Money::zero()),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(rule.cost(Money::from_cents(1999)).cents(), 500);
    /// assert!(rule.cost(Money::from_cents(2000)).is_zero());
    /// ```
    pub fn new(tiers: Vec<DeliveryTier>) -> Result<Self, ValidationError> {
        let thresholds: Vec<i64> = tiers.iter().map(|t| t.min_subtotal.cents()).collect();
        validate_thresholds(&thresholds)?;

        for tier in &tiers {
            validate_fee_cents(tier.fee.cents())?;
        }

        Ok(DeliveryRule { tiers })
    }

    /// Returns the fee for `subtotal`.
    ///
    /// Picks the last tier whose threshold is at or below the subtotal.
    /// A negative subtotal lands in the first tier.
    pub fn cost(&self, subtotal: Money) -> Money {
        self.tiers
            .iter()
            .rev()
            .find(|tier| subtotal >= tier.min_subtotal)
            .or_else(|| self.tiers.first())
            .map(|tier| tier.fee)
            .unwrap_or_default()
    }

    /// The tier table, ordered by threshold.
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }
}

impl Default for DeliveryRule {
    fn default() -> Self {
        DeliveryRule {
            tiers: vec![
                DeliveryTier::new(Money::zero(), Money::from_cents(495)),
                DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
                DeliveryTier::new(Money::from_cents(9000), Money::zero()),
            ],
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
