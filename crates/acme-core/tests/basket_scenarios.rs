//! End-to-end pricing of the Acme Widget Co example baskets.

use std::sync::Arc;

use acme_core::{
    Basket, Catalogue, CoreError, DeliveryRule, Money, Offer, PricingConfig, PricingSetup, Product,
    ValidationError,
};

fn acme() -> PricingSetup {
    PricingConfig::acme().build().unwrap()
}

fn total_of(codes: &[&str]) -> String {
    acme().price(codes).unwrap().total().to_string()
}

#[test]
fn blue_and_green() {
    assert_eq!(total_of(&["B01", "G01"]), "$37.85");
}

#[test]
fn two_reds() {
    // 65.90 - 16.475 = 49.425, still under 50 so delivery is 4.95.
    // 54.375 is charged as 54.37.
    let totals = acme().price(["R01", "R01"]).unwrap();
    assert_eq!(totals.subtotal_cents, 6590);
    assert_eq!(totals.discount_cents, 1648);
    assert_eq!(totals.delivery_cents, 495);
    assert_eq!(totals.total().to_string(), "$54.37");
}

#[test]
fn red_and_green() {
    assert_eq!(total_of(&["R01", "G01"]), "$60.85");
}

#[test]
fn two_blues_three_reds() {
    let totals = acme().price(["B01", "B01", "R01", "R01", "R01"]).unwrap();
    // 114.75 - 16.475 = 98.275, free delivery, charged as 98.27
    assert_eq!(totals.subtotal_cents, 11475);
    assert_eq!(totals.discount_cents, 1648);
    assert_eq!(totals.delivery_cents, 0);
    assert_eq!(totals.total().to_string(), "$98.27");
}

#[test]
fn unknown_code_aborts_the_basket() {
    let mut basket = acme().new_basket();
    basket.add("R01").unwrap();

    assert_eq!(
        basket.add("Q42"),
        Err(CoreError::UnknownProduct("Q42".to_string()))
    );
    assert_eq!(basket.item_codes(), vec!["R01"]);
}

/// A catalogue with a single product priced so that the basket subtotal
/// lands exactly where we want it. No offers.
fn basket_at(subtotal_cents: i64) -> Basket {
    let product = Product::new("P", "Widget", Money::from_cents(subtotal_cents)).unwrap();
    let catalogue = Arc::new(Catalogue::new([product]).unwrap());
    let mut basket = Basket::new(catalogue, Arc::new(DeliveryRule::default()), Vec::new());
    basket.add("P").unwrap();
    basket
}

#[test]
fn delivery_boundaries() {
    let cases = [(4999, 495), (5000, 295), (8999, 295), (9000, 0)];

    for (subtotal, fee) in cases {
        let basket = basket_at(subtotal);
        assert_eq!(basket.delivery().cents(), fee, "subtotal {subtotal}");
        assert_eq!(basket.total().cents(), subtotal + fee);
    }
}

#[test]
fn three_reds_discount_one_pair() {
    let mut basket = acme().new_basket();
    for _ in 0..3 {
        basket.add("R01").unwrap();
    }
    // one discounted pair, one full-price unit
    assert_eq!(basket.discount().cents(), 1648);
    assert_eq!(basket.subtotal().cents(), 3 * 3295);
}

#[test]
fn totals_never_negative_and_repeatable() {
    let setup = acme();
    let codes = ["R01", "G01", "B01"];

    // every sequence of up to three items drawn from the catalogue
    let mut baskets: Vec<Vec<&str>> = vec![Vec::new()];
    let mut frontier = baskets.clone();
    for _ in 0..3 {
        frontier = frontier
            .iter()
            .flat_map(|b| {
                codes.iter().map(move |c| {
                    let mut next = b.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        baskets.extend(frontier.iter().cloned());
    }
    assert_eq!(baskets.len(), 1 + 3 + 9 + 27);

    for codes in &baskets {
        let mut basket = setup.new_basket();
        for code in codes {
            basket.add(code).unwrap();
        }
        let total = basket.total();
        assert!(!total.is_negative(), "{codes:?}");
        assert!(basket.discount() <= basket.subtotal(), "{codes:?}");
        assert_eq!(basket.total(), total, "{codes:?}");

        let mut reversed = setup.new_basket();
        for code in codes.iter().rev() {
            reversed.add(code).unwrap();
        }
        assert_eq!(reversed.total(), total, "{codes:?}");
    }
}

#[test]
fn offers_see_undiscounted_items() {
    let mut config = PricingConfig::acme();
    config.offers.push(Offer::buy_one_get_second_half_off("G01"));
    let setup = config.build().unwrap();

    let totals = setup.price(["R01", "R01", "G01", "G01"]).unwrap();
    // R01 pair 1647.5 + G01 pair 1247.5, exact sum 2895
    assert_eq!(totals.discount_cents, 2895);
    // 11580 - 2895 = 8685 -> 2.95 delivery
    assert_eq!(totals.total_cents, 8685 + 295);
}

/// `P` at `pair_cents` with the half-off offer on it, bought twice, plus
/// one `F` at `filler_cents` when that is non-zero.
fn half_cent_basket(pair_cents: i64, filler_cents: i64) -> Basket {
    let products = [
        Product::new("P", "Paired", Money::from_cents(pair_cents)).unwrap(),
        Product::new("F", "Filler", Money::from_cents(filler_cents)).unwrap(),
    ];
    let catalogue = Arc::new(Catalogue::new(products).unwrap());
    let mut basket = Basket::new(
        catalogue,
        Arc::new(DeliveryRule::default()),
        vec![Offer::buy_one_get_second_half_off("P")],
    );
    basket.add("P").unwrap();
    basket.add("P").unwrap();
    if filler_cents > 0 {
        basket.add("F").unwrap();
    }
    basket
}

#[test]
fn half_cent_under_fifty_pays_lowest_tier() {
    // 66.66 - 16.665 = 49.995
    let totals = half_cent_basket(3333, 0).breakdown();
    assert_eq!(totals.subtotal_cents, 6666);
    assert_eq!(totals.discount_cents, 1667);
    assert_eq!(totals.delivery_cents, 495);
    // 54.945 charged as 54.94
    assert_eq!(totals.total_cents, 5494);
}

#[test]
fn half_cent_under_ninety_pays_middle_tier() {
    // 106.66 - 16.665 = 89.995
    let totals = half_cent_basket(3333, 4000).breakdown();
    assert_eq!(totals.subtotal_cents, 10666);
    assert_eq!(totals.delivery_cents, 295);
    // 92.945 charged as 92.94
    assert_eq!(totals.total_cents, 9294);
}

#[test]
fn half_cent_over_fifty_pays_middle_tier() {
    // 66.67 - 16.665 = 50.005
    let totals = half_cent_basket(3333, 1).breakdown();
    assert_eq!(totals.delivery_cents, 295);
    assert_eq!(totals.total_cents, 6667 - 1667 + 295);
}

#[test]
fn oversized_price_is_rejected() {
    let mut config = PricingConfig::acme();
    config.products[0].price_cents = i64::MAX / 2 + 1;

    assert!(matches!(
        config.build(),
        Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
    ));
}
