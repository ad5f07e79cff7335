//! Cart

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::menu::{MenuItem, MenuItemId};

/// Errors related to cart construction.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A line was given a quantity of zero.
    #[error("Line for item {0} must have a quantity of at least 1")]
    ZeroQuantity(MenuItemId),

    /// More than one line refers to the same menu item.
    #[error("Item {0} appears on more than one line")]
    DuplicateLine(MenuItemId),
}

/// One distinct menu item in the cart, with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    item_id: MenuItemId,
    name: String,
    unit_price: Decimal,
    quantity: NonZeroU32,
}

impl LineItem {
    /// Creates a line for `quantity` units of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is zero.
    pub fn new(item: &MenuItem, quantity: u32) -> Result<Self, CartError> {
        let quantity = NonZeroU32::new(quantity).ok_or(CartError::ZeroQuantity(item.id()))?;

        Ok(Self {
            item_id: item.id(),
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity,
        })
    }

    fn single(item: &MenuItem) -> Self {
        Self {
            item_id: item.id(),
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Menu item this line refers to
    pub fn item_id(&self) -> MenuItemId {
        self.item_id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Number of units, never zero
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity.
    ///
    /// Bounded by [`MenuItem::MAX_UNIT_PRICE`] times `u32::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity.get())
    }
}

/// The order currently being built.
///
/// Holds at most one line per menu item, in the order items were first added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: SmallVec<[LineItem; 8]>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: SmallVec::new(),
            currency,
        }
    }

    /// Create a cart from explicit lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateLine`] if two lines refer to the same item.
    pub fn with_lines(
        lines: impl IntoIterator<Item = LineItem>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let mut cart = Cart::new(currency);

        for line in lines {
            if cart.get(line.item_id).is_some() {
                return Err(CartError::DuplicateLine(line.item_id));
            }

            cart.lines.push(line);
        }

        Ok(cart)
    }

    /// Add one unit of `item`, returning the updated cart.
    #[must_use]
    pub fn add_item(mut self, item: &MenuItem) -> Self {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.item_id == item.id())
        {
            line.quantity = line.quantity.saturating_add(1);

            debug!(item_id = %item.id(), quantity = line.quantity.get(), "incremented cart line");
        } else {
            self.lines.push(LineItem::single(item));

            debug!(item_id = %item.id(), "added cart line");
        }

        self
    }

    /// Remove one unit of the item with `item_id`, returning the updated cart.
    ///
    /// A line whose quantity reaches zero is dropped. Removing an item that is
    /// not in the cart leaves it unchanged.
    #[must_use]
    pub fn remove_item(mut self, item_id: MenuItemId) -> Self {
        let Some(position) = self.lines.iter().position(|line| line.item_id == item_id) else {
            debug!(%item_id, "item not in cart, nothing to remove");

            return self;
        };

        if let Some(line) = self.lines.get_mut(position)
            && let Some(quantity) = NonZeroU32::new(line.quantity.get() - 1)
        {
            line.quantity = quantity;

            debug!(%item_id, quantity = quantity.get(), "decremented cart line");

            return self;
        }

        self.lines.remove(position);

        debug!(%item_id, "removed cart line");

        self
    }

    /// Get the line for a menu item.
    pub fn get(&self, item_id: MenuItemId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    /// Quantity of a menu item in the cart, zero if absent.
    pub fn quantity_of(&self, item_id: MenuItemId) -> u32 {
        self.get(item_id).map_or(0, LineItem::quantity)
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Returns a copy of `cart` with one more unit of `item`.
pub fn add_item(cart: &Cart, item: &MenuItem) -> Cart {
    cart.clone().add_item(item)
}

/// Returns a copy of `cart` with one unit of `item_id` removed.
pub fn remove_item(cart: &Cart, item_id: MenuItemId) -> Cart {
    cart.clone().remove_item(item_id)
}
