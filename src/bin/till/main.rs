//! Till command line
//!
//! Loads a menu and pricing settings, builds a cart and prints its receipt.
//! When both a payment method and a customer number are given, the cart is
//! checked out as an order.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use jiff::Zoned;
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::util::TryInitError;

use till::{
    prelude::*,
    receipt::to_money,
};

use crate::config::TillConfig;

mod config;
mod logging;

/// Errors surfaced by the command line.
#[derive(Debug, Error)]
enum TillError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),
}

fn main() -> ExitCode {
    let config = TillConfig::load().unwrap_or_else(|err| err.exit());

    if let Err(err) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for logging errors"
        )]
        {
            eprintln!("{}", TillError::from(err));
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "till failed");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &TillConfig) -> Result<(), TillError> {
    let mut fixture = Fixture::with_base_path(&config.fixtures.base_path);
    fixture
        .load_menu(&config.fixtures.menu)?
        .load_pricing(&config.fixtures.pricing)?;

    let menu = fixture.menu()?;

    let mut pricing = fixture.pricing();
    if let Some(discount) = config.order.discount {
        pricing = pricing.with_discount(discount);
    }

    let draft = prepare(config, &fixture)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Some(category) = config.order.category {
        write_menu(&mut handle, menu, category.into())?;
    }

    if let Some((payment, customer)) = checkout_details(&draft) {
        let order = Order::checkout(
            draft.cart,
            &pricing,
            payment,
            customer,
            Zoned::now().date(),
        )?;

        order.receipt().write_to(&mut handle)?;

        writeln!(
            handle,
            "Customer {} | {} | {}",
            order.customer(),
            order.payment_method(),
            order.date()
        )?;
    } else {
        let totals = pricing.totals(&draft.cart, draft.payment);

        info!(lines = draft.cart.len(), "cart not checked out");

        Receipt::new(&draft.cart, &totals)?.write_to(&mut handle)?;
    }

    Ok(())
}

/// Start from the order fixture, if any, then apply `--add` and `--remove`
/// in that order. Payment and customer flags take precedence over the fixture.
fn prepare(config: &TillConfig, fixture: &Fixture) -> Result<OrderDraft, TillError> {
    let menu = fixture.menu()?;

    let draft = match &config.order.order {
        Some(name) => fixture.load_order(name)?,
        None => OrderDraft {
            cart: Cart::new(menu.currency()),
            payment: None,
            customer: None,
        },
    };

    let mut cart = draft.cart;

    for id in &config.order.add {
        cart = cart.add_item(menu.require(*id)?);
    }

    for id in &config.order.remove {
        cart = cart.remove_item(*id);
    }

    Ok(OrderDraft {
        cart,
        payment: config.order.payment.or(draft.payment),
        customer: config.order.customer.or(draft.customer),
    })
}

/// Payment method and customer to check out with, once the cart has items
/// and both are known.
fn checkout_details(draft: &OrderDraft) -> Option<(PaymentMethod, CustomerNumber)> {
    match (draft.payment, draft.customer) {
        (Some(payment), Some(customer)) if !draft.cart.is_empty() => Some((payment, customer)),
        _ => None,
    }
}

fn write_menu(
    out: &mut impl Write,
    menu: &Menu,
    filter: CategoryFilter,
) -> Result<(), TillError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Item", "Category", "Price"]);

    for item in menu.filter(filter) {
        builder.push_record([
            item.id().to_string(),
            item.name().to_string(),
            item.category().to_string(),
            to_money(item.unit_price(), menu.currency())?.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "\n{table}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    fn draft_for(args: &[&str]) -> Result<OrderDraft, Box<dyn std::error::Error>> {
        let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");
        let config = TillConfig::try_parse_from(
            ["till", "--fixtures", fixtures]
                .into_iter()
                .chain(args.iter().copied()),
        )?;

        let mut fixture = Fixture::with_base_path(&config.fixtures.base_path);
        fixture.load_menu(&config.fixtures.menu)?;

        Ok(prepare(&config, &fixture)?)
    }

    #[test]
    fn additions_apply_before_removals() -> TestResult {
        let draft = draft_for(&["--order", "lunch", "-a", "3", "-a", "1", "-r", "3", "-r", "2"])?;

        assert_eq!(draft.cart.quantity_of(MenuItemId::new(1)), 3);
        assert_eq!(draft.cart.quantity_of(MenuItemId::new(2)), 0);
        assert_eq!(draft.cart.quantity_of(MenuItemId::new(3)), 0);
        assert_eq!(draft.cart.len(), 1);

        Ok(())
    }

    #[test]
    fn unknown_item_is_an_error() {
        assert!(draft_for(&["-a", "99"]).is_err());
    }

    #[test]
    fn flags_override_order_fixture() -> TestResult {
        let from_fixture = draft_for(&["--order", "lunch"])?;
        let overridden = draft_for(&["--order", "lunch", "-p", "card", "-c", "7"])?;

        assert_eq!(from_fixture.payment, Some(PaymentMethod::Cash));
        assert_eq!(from_fixture.customer.map(CustomerNumber::get), Some(1001));
        assert_eq!(overridden.payment, Some(PaymentMethod::Card));
        assert_eq!(overridden.customer.map(CustomerNumber::get), Some(7));
        assert_eq!(overridden.cart, from_fixture.cart);

        Ok(())
    }

    #[test]
    fn checkout_needs_items_payment_and_customer() -> TestResult {
        let lunch = draft_for(&["--order", "lunch"])?;
        let no_customer = draft_for(&["-a", "4", "-p", "card"])?;
        let no_payment = draft_for(&["-a", "4", "-c", "7"])?;
        let emptied = draft_for(&["--order", "lunch", "-r", "1", "-r", "1", "-r", "2"])?;
        let ready = draft_for(&["-a", "4", "-p", "card", "-c", "7"])?;

        assert_eq!(
            checkout_details(&lunch),
            Some((PaymentMethod::Cash, CustomerNumber::new(1001)?))
        );
        assert_eq!(checkout_details(&no_customer), None);
        assert_eq!(checkout_details(&no_payment), None);
        assert!(emptied.cart.is_empty());
        assert_eq!(checkout_details(&emptied), None);
        assert_eq!(
            checkout_details(&ready),
            Some((PaymentMethod::Card, CustomerNumber::new(7)?))
        );

        Ok(())
    }
}
