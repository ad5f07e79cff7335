//! End-to-end pricing of the restaurant menu fixture.
//!
//! Cart: 2 x Burger ($5.99) + 1 x Pizza ($8.99), 5% discount.
//!
//! - Subtotal: 20.97
//! - Discount: 1.0485
//! - Tax at 16% on 19.9215: 3.18744
//! - Total: 23.10894, printed as $23.11

use std::path::PathBuf;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use till::prelude::*;

fn fixture() -> TestResult<Fixture> {
    let mut fixture =
        Fixture::with_base_path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"));

    fixture.load_menu("restaurant")?.load_pricing("default")?;

    Ok(fixture)
}

#[test]
fn lunch_order_matches_worked_example() -> TestResult {
    let fixture = fixture()?;
    let draft = fixture.load_order("lunch")?;
    let pricing = fixture.pricing();

    let totals = pricing.totals(&draft.cart, draft.payment);

    assert_eq!(totals.subtotal, Decimal::new(2097, 2));
    assert_eq!(totals.discount, Decimal::new(10485, 4));
    assert_eq!(totals.tax, Decimal::new(318_744, 5));
    assert_eq!(totals.total, Decimal::new(2_310_894, 5));

    let receipt = Receipt::new(&draft.cart, &totals)?;
    assert_eq!(receipt.total(), Money::from_minor(2311, USD));

    Ok(())
}

#[test]
fn building_the_cart_by_hand_matches_the_fixture() -> TestResult {
    let fixture = fixture()?;
    let menu = fixture.menu()?;
    let burger = menu.require(MenuItemId::new(1))?;
    let pizza = menu.require(MenuItemId::new(2))?;

    let cart = Cart::new(menu.currency())
        .add_item(burger)
        .add_item(pizza)
        .add_item(burger);

    let draft = fixture.load_order("lunch")?;

    assert_eq!(cart, draft.cart);

    Ok(())
}

#[test]
fn unset_payment_method_charges_cash_rate() -> TestResult {
    let fixture = fixture()?;
    let draft = fixture.load_order("lunch")?;
    let pricing = fixture.pricing();

    let unset = pricing.totals(&draft.cart, None);
    let cash = pricing.totals(&draft.cart, Some(PaymentMethod::Cash));
    let card = pricing.totals(&draft.cart, Some(PaymentMethod::Card));

    assert_eq!(unset, cash);
    assert!(card.total < cash.total);

    Ok(())
}

#[test]
fn empty_cart_is_zero_under_any_configuration() -> TestResult {
    let cart = Cart::new(USD);

    for discount in ["0", "5", "100"] {
        for method in [None, Some(PaymentMethod::Card), Some(PaymentMethod::Cash)] {
            let pricing = PricingConfig::default().with_discount(discount.parse()?);
            let totals = pricing.totals(&cart, method);

            assert_eq!(subtotal(&cart), Decimal::ZERO);
            assert_eq!(totals.discount, Decimal::ZERO);
            assert_eq!(totals.tax, Decimal::ZERO);
            assert_eq!(totals.total, Decimal::ZERO);
        }
    }

    Ok(())
}

#[test]
fn removing_unknown_item_leaves_cart_unchanged() -> TestResult {
    let fixture = fixture()?;
    let draft = fixture.load_order("lunch")?;

    let after = remove_item(&draft.cart, MenuItemId::new(3));

    assert_eq!(after, draft.cart);

    Ok(())
}

#[test]
fn subtotal_is_zero_only_for_empty_cart() -> TestResult {
    let fixture = fixture()?;
    let menu = fixture.menu()?;
    let mut cart = Cart::new(menu.currency());

    assert_eq!(subtotal(&cart), Decimal::ZERO);

    for item in menu.iter() {
        cart = cart.add_item(item);

        assert!(subtotal(&cart) > Decimal::ZERO);
    }

    for item in menu.iter() {
        assert!(!cart.is_empty());

        cart = cart.remove_item(item.id());
    }

    assert!(cart.is_empty());
    assert_eq!(subtotal(&cart), Decimal::ZERO);

    Ok(())
}

#[test]
fn checkout_produces_order_with_receipt() -> TestResult {
    let fixture = fixture()?;
    let draft = fixture.load_order("lunch")?;
    let customer = CustomerNumber::new(1001)?;

    assert_eq!(draft.customer, Some(customer));

    let order = Order::checkout(
        draft.cart,
        &fixture.pricing(),
        PaymentMethod::Card,
        customer,
        jiff::civil::date(2024, 11, 2),
    )?;

    // 19.9215 taxed at 4%: 0.79686, total 20.71836
    assert_eq!(order.totals().total, Decimal::new(2_071_836, 5));
    assert_eq!(order.receipt().total(), Money::from_minor(2072, USD));

    let mut out = Vec::new();
    order.receipt().write_to(&mut out)?;
    let output = String::from_utf8(out)?;

    assert!(output.contains("Tax (4%):"));
    assert!(output.contains("20.72"));

    Ok(())
}

#[test]
fn menu_filter_matches_order_screen_categories() -> TestResult {
    let fixture = fixture()?;
    let menu = fixture.menu()?;

    let desserts: Vec<&str> = menu.filter(Category::Dessert).map(MenuItem::name).collect();
    let drinks: Vec<&str> = menu.filter(Category::Drinks).map(MenuItem::name).collect();

    assert_eq!(desserts, ["Ice Cream"]);
    assert_eq!(drinks, ["Soda"]);
    assert_eq!(menu.filter(CategoryFilter::All).count(), 4);

    Ok(())
}
