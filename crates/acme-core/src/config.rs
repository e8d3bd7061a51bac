//! # Pricing Configuration
//!
//! Serde description of a pricing setup: catalogue, offers and delivery
//! tiers. Parsing the text (TOML, JSON) is left to the caller, so this
//! module stays free of I/O.
//!
//! ## Configuration Format
//! ```toml
//! [[products]]
//! code = "R01"
//! name = "Red Widget"
//! price_cents = 3295
//!
//! [[offers]]
//! kind = "buy_one_get_second_half_off"
//! product_code = "R01"
//!
//! [[delivery]]
//! min_subtotal_cents = 0
//! fee_cents = 495
//! ```
//!
//! `offers` and `delivery` may be omitted. No delivery tiers means the
//! default table.
//!
//! ## Build Flow
//! ```text
//! PricingConfig ──build()──► PricingSetup ──new_basket()──► Basket
//!   (plain data)              (validated,        (one per pricing
//!                              Arc-shared)        session)
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basket::{Basket, BasketTotals};
use crate::delivery::{DeliveryRule, DeliveryTier};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offer::Offer;
use crate::types::{Catalogue, Product};

/// A catalogue entry as written in config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductConfig {
    pub code: String,
    pub name: String,
    pub price_cents: i64,
}

/// A delivery tier as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliveryTierConfig {
    pub min_subtotal_cents: i64,
    pub fee_cents: i64,
}

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    pub products: Vec<ProductConfig>,

    #[serde(default)]
    pub offers: Vec<Offer>,

    #[serde(default)]
    pub delivery: Vec<DeliveryTierConfig>,
}

impl PricingConfig {
    /// The Acme Widget Co setup.
    ///
    /// ## Default Values
    /// - R01 Red Widget $32.95, G01 Green Widget $24.95, B01 Blue Widget $7.95
    /// - Buy one R01, get the second half price
    /// - Delivery $4.95 under $50, $2.95 under $90, free from $90
    pub fn acme() -> Self {
        let product = |code: &str, name: &str, price_cents| ProductConfig {
            code: code.to_string(),
            name: name.to_string(),
            price_cents,
        };

        PricingConfig {
            products: vec![
                product("R01", "Red Widget", 3295),
                product("G01", "Green Widget", 2495),
                product("B01", "Blue Widget", 795),
            ],
            offers: vec![Offer::buy_one_get_second_half_off("R01")],
            delivery: DeliveryRule::default()
                .tiers()
                .iter()
                .map(|tier| DeliveryTierConfig {
                    min_subtotal_cents: tier.min_subtotal.cents(),
                    fee_cents: tier.fee.cents(),
                })
                .collect(),
        }
    }

    /// Validates the config and builds shareable pricing collaborators.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a bad product, duplicate code or bad
    ///   delivery table
    /// - `CoreError::UnknownProduct` for an offer on a product that isn't in
    ///   the catalogue
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::PricingConfig;
    ///
    /// let setup = PricingConfig::acme().build().unwrap();
    /// assert_eq!(setup.catalogue().len(), 3);
    /// assert_eq!(setup.offers().len(), 1);
    /// ```
    pub fn build(&self) -> CoreResult<PricingSetup> {
        let products = self
            .products
            .iter()
            .map(|p| {
                Product::new(
                    p.code.as_str(),
                    p.name.as_str(),
                    Money::from_cents(p.price_cents),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let catalogue = Catalogue::new(products)?;

        for offer in &self.offers {
            if !catalogue.contains(offer.product_code()) {
                return Err(CoreError::UnknownProduct(offer.product_code().to_string()));
            }
        }

        let delivery_rule = if self.delivery.is_empty() {
            DeliveryRule::default()
        } else {
            DeliveryRule::new(
                self.delivery
                    .iter()
                    .map(|t| {
                        DeliveryTier::new(
                            Money::from_cents(t.min_subtotal_cents),
                            Money::from_cents(t.fee_cents),
                        )
                    })
                    .collect(),
            )?
        };

        debug!(
            products = catalogue.len(),
            offers = self.offers.len(),
            delivery_tiers = delivery_rule.tiers().len(),
            "Built pricing setup"
        );

        Ok(PricingSetup {
            catalogue: Arc::new(catalogue),
            delivery_rule: Arc::new(delivery_rule),
            offers: self.offers.clone(),
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig::acme()
    }
}

/// Validated, shareable pricing collaborators.
///
/// Cloning is cheap: the catalogue and delivery rule are reference counted.
#[derive(Debug, Clone)]
pub struct PricingSetup {
    catalogue: Arc<Catalogue>,
    delivery_rule: Arc<DeliveryRule>,
    offers: Vec<Offer>,
}

impl PricingSetup {
    /// Starts an independent, empty basket.
    pub fn new_basket(&self) -> Basket {
        Basket::new(
            Arc::clone(&self.catalogue),
            Arc::clone(&self.delivery_rule),
            self.offers.clone(),
        )
    }

    /// Prices a basket of `codes` in one call.
    ///
    /// Stops at the first unknown code.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::PricingConfig;
    ///
    /// let setup = PricingConfig::acme().build().unwrap();
    /// let totals = setup.price(["B01", "G01"]).unwrap();
    /// assert_eq!(totals.total().to_string(), "$37.85");
    /// ```
    pub fn price<I, S>(&self, codes: I) -> CoreResult<BasketTotals>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut basket = self.new_basket();
        for code in codes {
            basket.add(code.as_ref())?;
        }
        Ok(basket.breakdown())
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn delivery_rule(&self) -> &DeliveryRule {
        &self.delivery_rule
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    const ACME_TOML: &str = r#"
        [[products]]
        code = "R01"
        name = "Red Widget"
        price_cents = 3295

        [[products]]
        code = "G01"
        name = "Green Widget"
        price_cents = 2495

        [[products]]
        code = "B01"
        name = "Blue Widget"
        price_cents = 795

        [[offers]]
        kind = "buy_one_get_second_half_off"
        product_code = "R01"

        [[delivery]]
        min_subtotal_cents = 0
        fee_cents = 495

        [[delivery]]
        min_subtotal_cents = 5000
        fee_cents = 295

        [[delivery]]
        min_subtotal_cents = 9000
        fee_cents = 0
    "#;

    #[test]
    fn test_toml_matches_builtin() {
        let parsed: PricingConfig = toml::from_str(ACME_TOML).unwrap();
        assert_eq!(parsed, PricingConfig::acme());
    }

    #[test]
    fn test_default_is_acme() {
        assert_eq!(PricingConfig::default(), PricingConfig::acme());
    }

    #[test]
    fn test_optional_sections() {
        let parsed: PricingConfig = toml::from_str(
            r#"
            [[products]]
            code = "X01"
            name = "Gadget"
            price_cents = 1000
            "#,
        )
        .unwrap();
        assert!(parsed.offers.is_empty());
        assert!(parsed.delivery.is_empty());

        let setup = parsed.build().unwrap();
        assert_eq!(setup.delivery_rule(), &DeliveryRule::default());
        assert_eq!(setup.price(["X01"]).unwrap().total_cents, 1495);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<PricingConfig, _> = toml::from_str(
            r#"
            [[products]]
            code = "X01"
            name = "Gadget"
            price = 10.00
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_offer_on_missing_product() {
        let mut config = PricingConfig::acme();
        config.offers.push(Offer::buy_one_get_second_half_off("Z99"));

        assert_eq!(
            config.build().unwrap_err(),
            CoreError::UnknownProduct("Z99".to_string())
        );
    }

    #[test]
    fn test_build_rejects_duplicate_products() {
        let mut config = PricingConfig::acme();
        config.products.push(config.products[0].clone());

        assert!(matches!(
            config.build(),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_negative_price() {
        let mut config = PricingConfig::acme();
        config.products[0].price_cents = -1;

        assert!(matches!(
            config.build(),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_bad_delivery_table() {
        let mut config = PricingConfig::acme();
        config.delivery.swap(1, 2);

        assert!(matches!(
            config.build(),
            Err(CoreError::Validation(ValidationError::NotAscending { .. }))
        ));
    }

    #[test]
    fn test_custom_delivery_table() {
        let mut config = PricingConfig::acme();
        config.delivery = vec![
            DeliveryTierConfig {
                min_subtotal_cents: 0,
                fee_cents: 1000,
            },
            DeliveryTierConfig {
                min_subtotal_cents: 3000,
                fee_cents: 0,
            },
        ];

        let setup = config.build().unwrap();
        assert_eq!(setup.price(["G01"]).unwrap().total_cents, 2495 + 1000);
        assert_eq!(setup.price(["R01"]).unwrap().total_cents, 3295);
    }

    #[test]
    fn test_price_stops_at_unknown_code() {
        let setup = PricingConfig::acme().build().unwrap();
        assert_eq!(
            setup.price(["B01", "NOPE", "G01"]).unwrap_err(),
            CoreError::UnknownProduct("NOPE".to_string())
        );
    }

    #[test]
    fn test_baskets_from_one_setup_are_independent() {
        let setup = PricingConfig::acme().build().unwrap();
        let mut a = setup.new_basket();
        let b = setup.new_basket();

        a.add("R01").unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_setup_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingSetup>();
        assert_send_sync::<Basket>();
    }
}
