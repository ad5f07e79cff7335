//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, LineItem, add_item, remove_item},
    discounts::{DiscountError, DiscountPercent},
    fixtures::{Fixture, FixtureError, OrderDraft},
    menu::{Category, CategoryFilter, Menu, MenuError, MenuItem, MenuItemId},
    order::{CustomerNumber, Order, OrderError},
    pricing::{
        PricingConfig, Totals, discount_amount, final_total, subtotal, tax_amount,
    },
    receipt::{Receipt, ReceiptError, ReceiptLine},
    tax::{PaymentMethod, TaxError, TaxRate, TaxTiers, select_tax_rate},
};
