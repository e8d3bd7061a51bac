//! # acme-core: Pure Basket Pricing for Acme Widget Co
//!
//! This crate contains the pricing logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acme Basket Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    acme-basket (CLI)                            │   │
//! │  │    args ──► config file (TOML) ──► baskets ──► stdout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   offer   │  │ delivery  │  │  basket   │  │   │
//! │  │   │  Product  │  │  Offer    │  │  Rule     │  │  Basket   │  │   │
//! │  │   │ Catalogue │  │           │  │  Tier     │  │  Totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO ENV • PURE FUNCTIONS                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Catalogue
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`offer`] - Discount rules
//! - [`delivery`] - Tiered delivery fees
//! - [`basket`] - The basket and its totaling pipeline
//! - [`config`] - Serde pricing configuration
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::PricingConfig;
//!
//! let setup = PricingConfig::acme().build().unwrap();
//! let mut basket = setup.new_basket();
//!
//! basket.add("R01").unwrap();
//! basket.add("R01").unwrap();
//!
//! // 65.90 - 16.475 (second R01 half price) + 4.95 delivery = 54.375
//! assert_eq!(basket.total().to_string(), "$54.37");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod config;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;
pub mod types;
pub mod validation;

// =============================================================================
// Business Constants
// =============================================================================

/// Highest product price or delivery fee accepted, in cents ($1,000,000).
///
/// Together with `MAX_BASKET_ITEMS` this keeps every basket total well
/// inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Maximum units in one basket.
pub const MAX_BASKET_ITEMS: usize = 10_000;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketTotals};
pub use config::{DeliveryTierConfig, PricingConfig, PricingSetup, ProductConfig};
pub use delivery::{DeliveryRule, DeliveryTier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offer::{Discount, Offer};
pub use types::{Catalogue, Product};
