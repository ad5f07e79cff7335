//! Order Fixtures

use serde::Deserialize;

use crate::{
    cart::{Cart, LineItem},
    fixtures::FixtureError,
    menu::{Menu, MenuItemId},
    order::CustomerNumber,
    tax::PaymentMethod,
};

/// Sample order in YAML
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Payment method, if one has been chosen
    #[serde(default)]
    pub payment: Option<PaymentMethod>,

    /// Customer number, if one has been entered
    #[serde(default)]
    pub customer: Option<u64>,

    /// Cart lines
    #[serde(default)]
    pub lines: Vec<OrderLineFixture>,
}

/// Order Line Fixture
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Menu item id
    pub item: MenuItemId,

    /// Units ordered; defaults to 1
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

/// An order in progress, as loaded from a fixture.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Cart built from the fixture lines
    pub cart: Cart,

    /// Chosen payment method
    pub payment: Option<PaymentMethod>,

    /// Customer number
    pub customer: Option<CustomerNumber>,
}

impl OrderFixture {
    /// Resolve the fixture lines against `menu`.
    ///
    /// # Errors
    ///
    /// Returns an error if a line names an unknown item, has a zero quantity,
    /// or repeats an item, or if the customer number is zero.
    pub fn into_draft(self, menu: &Menu) -> Result<OrderDraft, FixtureError> {
        let lines = self
            .lines
            .iter()
            .map(|line| -> Result<LineItem, FixtureError> {
                Ok(LineItem::new(menu.require(line.item)?, line.quantity)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cart = Cart::with_lines(lines, menu.currency())?;
        let customer = self.customer.map(CustomerNumber::new).transpose()?;

        Ok(OrderDraft {
            cart,
            payment: self.payment,
            customer,
        })
    }
}
