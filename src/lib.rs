//! Till
//!
//! Till is the pricing engine behind a restaurant order screen: a menu
//! catalog, an order cart, and the discount-then-tax arithmetic that turns
//! the cart into the amount charged.

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod menu;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod tax;
