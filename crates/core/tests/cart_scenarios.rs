//! Cart behaviour against the demo catalog

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use shopfront::{
    cart::Cart,
    catalog::Catalog,
    pricing::{format_price, total_price},
    products::Product,
};

#[test]
fn pillow_then_carpet_totals_109_98() -> TestResult {
    let catalog = Catalog::demo()?;
    let mut cart = Cart::new(catalog.currency());

    cart.add_item(catalog.get("pillow")?.clone())?;
    cart.add_item(catalog.get("carpet")?.clone())?;

    let titles: Vec<&str> = cart.items().iter().map(|item| item.title.as_str()).collect();

    assert_eq!(titles, ["A Pillow", "A Carpet"]);
    assert_eq!(cart.total().amount(), &Decimal::new(10998, 2));
    assert_eq!(format_price(&cart.total()), "$109.98");

    Ok(())
}

#[test]
fn same_product_twice_counts_twice() -> TestResult {
    let catalog = Catalog::demo()?;
    let pillow = catalog.get("pillow")?;
    let mut cart = Cart::new(catalog.currency());

    cart.add_item(pillow.clone())?;
    cart.add_item(pillow.clone())?;

    assert_eq!(cart.len(), 2);
    assert!(cart.items().iter().all(|item| item == pillow));
    assert_eq!(cart.total().amount(), &(*pillow.price.amount() * Decimal::TWO));

    Ok(())
}

#[test]
fn untouched_cart_shows_zero_total() {
    let cart = Cart::new(USD);
    let snapshot = cart.snapshot();

    assert!(snapshot.items.is_empty());
    assert_eq!(snapshot.total, Money::from_minor(0, USD));
    assert_eq!(format_price(&snapshot.total), "$0.00");
}

#[test]
fn reads_are_stable_between_adds() -> TestResult {
    let catalog = Catalog::demo()?;
    let mut cart = Cart::new(catalog.currency());
    cart.add_item(catalog.get("carpet")?.clone())?;

    assert_eq!(cart.total(), cart.total());
    assert_eq!(cart.items(), cart.items());
    assert_eq!(cart.snapshot(), cart.snapshot());

    Ok(())
}

#[test]
fn long_sequence_keeps_order_and_exact_total() -> TestResult {
    let mut cart = Cart::new(USD);
    let mut expected = Decimal::ZERO;

    for step in 0..1_000_i64 {
        let amount = Decimal::new(step % 97 * 7 + 1, 2);
        expected += amount;

        cart.add_item(Product::new(
            format!("Item {step}"),
            "",
            "",
            Money::from_decimal(amount, USD),
        ))?;
    }

    assert_eq!(cart.len(), 1_000);
    assert_eq!(cart.total().amount(), &expected);
    assert_eq!(cart.total(), total_price(cart.items(), USD)?);

    let in_order = cart
        .items()
        .iter()
        .enumerate()
        .all(|(step, item)| item.title == format!("Item {step}"));

    assert!(in_order, "items should stay in insertion order");

    Ok(())
}

#[test]
fn rejected_add_leaves_cart_untouched() -> TestResult {
    let catalog = Catalog::demo()?;
    let mut cart = Cart::new(catalog.currency());
    cart.add_item(catalog.get("pillow")?.clone())?;

    let before = cart.clone();
    let broken = Product::new("Broken", "", "", Money::from_decimal(Decimal::NEGATIVE_ONE, USD));

    assert!(cart.add_item(broken).is_err());
    assert_eq!(cart, before);

    Ok(())
}
