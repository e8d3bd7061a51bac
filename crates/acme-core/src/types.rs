//! # Domain Types
//!
//! Catalogue types used throughout acme-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────────┐         │
//! │  │    Product      │  many    │        Catalogue             │         │
//! │  │  ─────────────  │ ───────► │  ──────────────────────────  │         │
//! │  │  code (key)     │          │  code → Product              │         │
//! │  │  name           │          │  fixed at construction       │         │
//! │  │  price (Money)  │          │  shared via Arc              │         │
//! │  └─────────────────┘          └──────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_code, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable once built: fields are private and only readable through
/// accessors, so a product in a basket always matches what was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    code: String,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Money, Product};
    ///
    /// let red = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// assert_eq!(red.code(), "R01");
    ///
    /// assert!(Product::new("R01", "Red Widget", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ValidationError> {
        let code = code.into();
        let name = name.into();

        validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_price_cents(price.cents())?;

        Ok(Product { code, name, price })
    }

    /// Product code, the catalogue key.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Catalogue
// =============================================================================

/// Read-only mapping from product code to product.
///
/// Built once and then shared between baskets; there is no way to add or
/// remove products afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    products: BTreeMap<String, Product>,
}

impl Catalogue {
    /// Builds a catalogue, rejecting duplicate product codes.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::{Catalogue, Money, Product};
    ///
    /// let catalogue = Catalogue::new([
    ///     Product::new("G01", "Green Widget", Money::from_cents(2495)).unwrap(),
    ///     Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(catalogue.len(), 2);
    /// assert!(catalogue.get("G01").is_some());
    /// assert!(catalogue.get("R01").is_none());
    /// ```
    pub fn new(products: impl IntoIterator<Item = Product>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();

        for product in products {
            if map.contains_key(product.code()) {
                return Err(ValidationError::Duplicate {
                    field: "product code".to_string(),
                    value: product.code().to_string(),
                }
                .into());
            }
            map.insert(product.code().to_string(), product);
        }

        Ok(Catalogue { products: map })
    }

    /// Looks up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// Checks whether the code is in the catalogue.
    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalogue has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products ordered by code.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
