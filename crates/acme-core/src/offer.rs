//! # Offers
//!
//! Pricing rules that turn a basket's item list into a discount.
//!
//! ## Offer Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  items (undiscounted) ──┬──► Offer A.apply ──► discount A ──┐           │
//! │                         │                                   ├──► Σ      │
//! │                         └──► Offer B.apply ──► discount B ──┘           │
//! │                                                                         │
//! │  Every offer sees the same full item list. Offers never see each       │
//! │  other's discounts; the basket just adds them up.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The set of offers is a closed enum, so an offer kind without an
//! `apply` rule cannot be constructed.
//!
//! ## Half Cents
//! Halving an odd number of cents leaves half a cent over (3295 / 2 =
//! 1647.5). Offers return a [`Discount`], which keeps that half cent, so
//! the basket picks a delivery tier from the exact discounted subtotal.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Discount
// =============================================================================

/// An offer discount, exact to the half cent.
///
/// ## Settling
/// A basket charges [`Discount::rounded_up`]. Taking the half cent off the
/// discount is the same as dropping half a cent from the final total, so
/// an exact total of $54.375 is charged as $54.37.
///
/// ## Example
/// ```rust
/// use acme_core::{offer::Discount, Money};
///
/// let discount = Discount::half_of(Money::from_cents(3295));
/// assert_eq!(discount.half_cents(), 3295);
/// assert_eq!(discount.rounded_up().cents(), 1648);
/// assert_eq!(discount.to_string(), "$16.475");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Discount {
    half_cents: i64,
}

impl Discount {
    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        Discount { half_cents: 0 }
    }

    /// Exactly half of `amount`.
    #[inline]
    pub const fn half_of(amount: Money) -> Self {
        Discount {
            half_cents: amount.cents(),
        }
    }

    /// The whole of `amount`.
    #[inline]
    pub const fn from_money(amount: Money) -> Self {
        Discount {
            half_cents: amount.cents() * 2,
        }
    }

    /// The exact value in half cents.
    #[inline]
    pub const fn half_cents(&self) -> i64 {
        self.half_cents
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.half_cents == 0
    }

    /// Whole cents, with any half cent rounded up.
    #[inline]
    pub const fn rounded_up(&self) -> Money {
        Money::from_cents((self.half_cents + 1).div_euclid(2))
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = Money::from_cents(self.half_cents.div_euclid(2));
        if self.half_cents.rem_euclid(2) == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}5")
        }
    }
}

impl Add for Discount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Discount {
            half_cents: self.half_cents + other.half_cents,
        }
    }
}

impl Sum for Discount {
    fn sum<I: Iterator<Item = Discount>>(iter: I) -> Self {
        iter.fold(Discount::zero(), Add::add)
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A discount rule.
///
/// Deserializes from a tagged table, e.g.
/// `{ kind = "buy_one_get_second_half_off", product_code = "R01" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Offer {
    /// Every second unit of `product_code` is half price.
    BuyOneGetSecondHalfOff { product_code: String },
}

impl Offer {
    /// Shorthand for [`Offer::BuyOneGetSecondHalfOff`].
    pub fn buy_one_get_second_half_off(product_code: impl Into<String>) -> Self {
        Offer::BuyOneGetSecondHalfOff {
            product_code: product_code.into(),
        }
    }

    /// Computes the discount this offer gives on `items`.
    ///
    /// ## Buy One Get Second Half Off
    /// ```text
    /// R01 × 3 at $32.95
    ///      │
    ///      ▼
    /// pairs = 3 / 2 = 1        (the odd unit pays full price)
    ///      │
    ///      ▼
    /// discount = half of (1 × $32.95) = $16.475  (kept exact)
    /// ```
    ///
    /// The unit price comes from the first matching item. The result is
    /// never negative and never more than the matched items are worth.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Money, Offer, Product};
    ///
    /// let red = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// let offer = Offer::buy_one_get_second_half_off("R01");
    ///
    /// assert!(offer.apply(&[red.clone()]).is_zero());
    /// assert_eq!(offer.apply(&[red.clone(), red]).to_string(), "$16.475");
    /// ```
    pub fn apply(&self, items: &[Product]) -> Discount {
        match self {
            Offer::BuyOneGetSecondHalfOff { product_code } => {
                let mut matching = items.iter().filter(|p| p.code() == product_code);

                let Some(first) = matching.next() else {
                    return Discount::zero();
                };
                let count = 1 + matching.count() as i64;
                let pairs = count / 2;

                if pairs == 0 {
                    return Discount::zero();
                }

                Discount::half_of(first.price() * pairs)
            }
        }
    }

    /// The product code this offer is tied to.
    pub fn product_code(&self) -> &str {
        match self {
            Offer::BuyOneGetSecondHalfOff { product_code } => product_code,
        }
    }

    /// Human-readable label for logs and summaries.
    pub fn description(&self) -> String {
        match self {
            Offer::BuyOneGetSecondHalfOff { product_code } => {
                format!("Buy one {product_code}, get the second half price")
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
