//! Menu Fixtures

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    menu::{Category, Menu, MenuItem, MenuItemId},
};

/// Wrapper for menus in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Menu items in display order
    pub items: Vec<MenuItemFixture>,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Catalog id
    pub id: MenuItemId,

    /// Item name
    pub name: String,

    /// Menu category
    pub category: Category,

    /// Unit price (e.g., "5.99 USD")
    pub price: String,
}

impl MenuFixture {
    /// Build a menu, checking that every item is priced in the same currency.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed, currencies differ between
    /// items, the menu is empty, or an item is invalid.
    pub fn into_menu(self) -> Result<Menu, FixtureError> {
        let mut currency: Option<&'static Currency> = None;
        let mut items = Vec::with_capacity(self.items.len());

        for fixture in self.items {
            let (amount, item_currency) = parse_price(&fixture.price)?;

            match currency {
                Some(existing) if existing != item_currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        item_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(item_currency),
            }

            items.push(MenuItem::new(
                fixture.id,
                fixture.name,
                amount,
                fixture.category,
            )?);
        }

        let currency = currency.ok_or(FixtureError::EmptyMenu)?;

        Ok(Menu::new(items, currency)?)
    }
}

/// Parse price string (e.g., "5.99 USD") into an exact amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((amount, currency))
}
