//! # Basket
//!
//! Accumulates products for one pricing session and derives the total.
//!
//! ## Totaling Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Basket::total()                                 │
//! │                                                                         │
//! │  1. subtotal  = Σ item prices                                          │
//! │          │                                                              │
//! │  2. discount  = Σ offer.apply(items)    (exact to the half cent,       │
//! │          │                               capped at subtotal)            │
//! │          ▼                                                              │
//! │  3. delivery  = delivery_rule.cost(subtotal − discount)                │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. total     = subtotal − discount + delivery, half cent dropped      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Only step 2 can produce a half cent. It is carried into steps 3 and 4
//! and settled once: the charged discount is rounded up, which drops the
//! half cent from the total ($54.375 → $54.37). Delivery thresholds are
//! whole cents, so `subtotal − rounded-up discount` falls in the same tier
//! as the exact discounted subtotal ($49.995 pays the under-$50 fee).
//!
//! ## Sharing
//! The catalogue and delivery rule are behind `Arc` and never mutated, so any
//! number of baskets can be priced against the same setup. Each basket owns
//! its item list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::delivery::DeliveryRule;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offer::{Discount, Offer};
use crate::types::{Catalogue, Product};
use crate::validation::validate_basket_size;

/// A basket of products bound to a catalogue, offers and a delivery rule.
#[derive(Debug, Clone)]
pub struct Basket {
    catalogue: Arc<Catalogue>,
    delivery_rule: Arc<DeliveryRule>,
    offers: Vec<Offer>,
    items: Vec<Product>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new(
        catalogue: Arc<Catalogue>,
        delivery_rule: Arc<DeliveryRule>,
        offers: Vec<Offer>,
    ) -> Self {
        Basket {
            catalogue,
            delivery_rule,
            offers,
            items: Vec::new(),
        }
    }

    /// Adds one unit of the product with `product_code`.
    ///
    /// ## Errors
    /// - `CoreError::UnknownProduct` if the code isn't in the catalogue
    /// - `CoreError::Validation` if the basket already holds
    ///   `MAX_BASKET_ITEMS` units
    ///
    /// On error the item list is left exactly as it was.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{CoreError, PricingConfig};
    ///
    /// let setup = PricingConfig::acme().build().unwrap();
    /// let mut basket = setup.new_basket();
    ///
    /// basket.add("B01").unwrap();
    /// assert_eq!(basket.add("X99"), Err(CoreError::UnknownProduct("X99".to_string())));
    /// assert_eq!(basket.len(), 1);
    /// ```
    pub fn add(&mut self, product_code: &str) -> CoreResult<()> {
        let Some(product) = self.catalogue.get(product_code) else {
            warn!(code = product_code, "Rejected unknown product code");
            return Err(CoreError::UnknownProduct(product_code.to_string()));
        };
        validate_basket_size(self.items.len())?;

        self.items.push(product.clone());
        debug!(
            code = product_code,
            price = %product.price(),
            items = self.items.len(),
            "Added product to basket"
        );
        Ok(())
    }

    /// Sum of item prices before any offer.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// Exact total discount from all offers, each applied to the full item
    /// list.
    ///
    /// Capped at the subtotal so the discounted subtotal is never negative.
    pub fn exact_discount(&self) -> Discount {
        let subtotal = self.subtotal();
        let cap = Discount::from_money(subtotal);
        let discount: Discount = self
            .offers
            .iter()
            .map(|offer| offer.apply(&self.items))
            .sum();

        if discount > cap {
            warn!(
                %discount,
                %subtotal,
                "Offer discounts exceed subtotal, capping"
            );
            return cap;
        }

        discount
    }

    /// Discount charged, in whole cents (half cent rounded up).
    pub fn discount(&self) -> Money {
        self.exact_discount().rounded_up()
    }

    /// Delivery fee, charged on the subtotal after discounts.
    pub fn delivery(&self) -> Money {
        self.delivery_rule.cost(self.subtotal() - self.discount())
    }

    /// Final price: subtotal − discount + delivery.
    ///
    /// Idempotent while the item list is unchanged.
    pub fn total(&self) -> Money {
        self.breakdown().total()
    }

    /// Computes every stage of the total in one pass.
    pub fn breakdown(&self) -> BasketTotals {
        let subtotal = self.subtotal();
        let exact_discount = self.exact_discount();
        let discount = exact_discount.rounded_up();
        let delivery = self.delivery_rule.cost(subtotal - discount);
        let total = subtotal - discount + delivery;

        debug!(
            items = self.items.len(),
            %subtotal,
            discount = %exact_discount,
            %delivery,
            %total,
            "Computed basket total"
        );

        BasketTotals {
            items: self.item_codes(),
            subtotal_cents: subtotal.cents(),
            discount_cents: discount.cents(),
            delivery_cents: delivery.cents(),
            total_cents: total.cents(),
        }
    }

    /// Products in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Product codes in the order they were added.
    pub fn item_codes(&self) -> Vec<String> {
        self.items.iter().map(|p| p.code().to_string()).collect()
    }

    /// Offers applied by this basket.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Number of units in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all items, keeping the catalogue, offers and delivery rule.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Snapshot of a basket's pricing, for output and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketTotals {
    pub items: Vec<String>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub delivery_cents: i64,
    pub total_cents: i64,
}

impl BasketTotals {
    /// The final total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

impl From<&Basket> for BasketTotals {
    fn from(basket: &Basket) -> Self {
        basket.breakdown()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
