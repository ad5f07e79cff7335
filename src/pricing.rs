//! Pricing
//!
//! Derives the cart totals. The discount is always taken before tax, and
//! tax is levied on the discounted amount. Nothing here rounds; amounts
//! keep full precision until they are presented.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    cart::{Cart, LineItem},
    discounts::DiscountPercent,
    tax::{PaymentMethod, TaxRate, TaxTiers},
};

/// Sum of unit price times quantity over every line. Zero for an empty cart.
pub fn subtotal(cart: &Cart) -> Decimal {
    cart.iter().map(LineItem::line_total).sum()
}

/// Amount taken off the subtotal.
pub fn discount_amount(cart: &Cart, discount: DiscountPercent) -> Decimal {
    discount.of(subtotal(cart))
}

/// Tax on the post-discount amount.
pub fn tax_amount(cart: &Cart, discount: DiscountPercent, tax_rate: TaxRate) -> Decimal {
    let subtotal = subtotal(cart);

    tax_rate.of(subtotal - discount.of(subtotal))
}

/// Subtotal minus discount plus tax.
pub fn final_total(cart: &Cart, discount: DiscountPercent, tax_rate: TaxRate) -> Decimal {
    Totals::compute(cart, discount, tax_rate).total
}

/// Discount and tax settings for an order-taking session.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PricingConfig {
    discount: DiscountPercent,
    tax_tiers: TaxTiers,
}

impl PricingConfig {
    /// Create a pricing config.
    pub fn new(discount: DiscountPercent, tax_tiers: TaxTiers) -> Self {
        Self {
            discount,
            tax_tiers,
        }
    }

    /// Returns a copy with a different discount.
    #[must_use]
    pub fn with_discount(self, discount: DiscountPercent) -> Self {
        Self { discount, ..self }
    }

    /// Discount applied to the subtotal
    pub fn discount(&self) -> DiscountPercent {
        self.discount
    }

    /// Tax tiers by payment method
    pub fn tax_tiers(&self) -> &TaxTiers {
        &self.tax_tiers
    }

    /// Tax rate for the selected payment method.
    pub fn tax_rate(&self, payment_method: Option<PaymentMethod>) -> TaxRate {
        self.tax_tiers.select(payment_method)
    }

    /// Compute all totals for `cart` given the selected payment method.
    pub fn totals(&self, cart: &Cart, payment_method: Option<PaymentMethod>) -> Totals {
        let totals = Totals::compute(cart, self.discount, self.tax_rate(payment_method));

        debug!(
            lines = cart.len(),
            payment_method = payment_method.map(tracing::field::display),
            subtotal = %totals.subtotal,
            total = %totals.total,
            "priced cart"
        );

        totals
    }
}

/// Every derived amount for a cart, unrounded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Totals {
    /// Sum of line totals
    pub subtotal: Decimal,

    /// Amount taken off the subtotal
    pub discount: Decimal,

    /// Tax on the discounted subtotal
    pub tax: Decimal,

    /// Amount charged to the customer
    pub total: Decimal,

    /// Discount that was applied
    pub discount_percent: DiscountPercent,

    /// Tax rate that was applied
    pub tax_rate: TaxRate,
}

impl Totals {
    /// Compute totals for a cart.
    pub fn compute(cart: &Cart, discount_percent: DiscountPercent, tax_rate: TaxRate) -> Self {
        let subtotal = subtotal(cart);
        let discount = discount_percent.of(subtotal);
        let tax = tax_rate.of(subtotal - discount);

        Self {
            subtotal,
            discount,
            tax,
            total: subtotal - discount + tax,
            discount_percent,
            tax_rate,
        }
    }
}
