//! Receipt
//!
//! The presentation edge of pricing: every amount is rounded to whole minor
//! units (cents) here and nowhere earlier.

use std::io;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, LineItem},
    discounts::DiscountPercent,
    pricing::Totals,
    tax::TaxRate,
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Amount is too large to express in minor units.
    #[error("amount {0} cannot be represented in minor units")]
    Unrepresentable(Decimal),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Round an exact amount half away from zero to the nearest minor unit.
///
/// # Errors
///
/// Returns [`ReceiptError::Unrepresentable`] if the amount overflows `i64` minor units.
pub fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, ReceiptError> {
    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|minor| minor.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|minor| minor.to_i64())
        .ok_or(ReceiptError::Unrepresentable(amount))?;

    Ok(Money::from_minor(minor, currency))
}

/// One printed line of a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Item name
    pub name: String,

    /// Units bought
    pub quantity: u32,

    /// Price of one unit
    pub unit_price: Money<'static, Currency>,

    /// Unit price times quantity
    pub amount: Money<'static, Currency>,
}

impl ReceiptLine {
    fn from_line(line: &LineItem, currency: &'static Currency) -> Result<Self, ReceiptError> {
        Ok(Self {
            name: line.name().to_string(),
            quantity: line.quantity(),
            unit_price: to_money(line.unit_price(), currency)?,
            amount: to_money(line.line_total(), currency)?,
        })
    }
}

/// Rounded, currency-formatted totals for a cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: Vec<ReceiptLine>,
    subtotal: Money<'static, Currency>,
    discount: Money<'static, Currency>,
    tax: Money<'static, Currency>,
    total: Money<'static, Currency>,
    discount_percent: DiscountPercent,
    tax_rate: TaxRate,
}

impl Receipt {
    /// Build a receipt for `cart` from its computed totals.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Unrepresentable`] if any amount overflows minor units.
    pub fn new(cart: &Cart, totals: &Totals) -> Result<Self, ReceiptError> {
        let currency = cart.currency();

        let lines = cart
            .iter()
            .map(|line| ReceiptLine::from_line(line, currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            lines,
            subtotal: to_money(totals.subtotal, currency)?,
            discount: to_money(totals.discount, currency)?,
            tax: to_money(totals.tax, currency)?,
            total: to_money(totals.total, currency)?,
            discount_percent: totals.discount_percent,
            tax_rate: totals.tax_rate,
        })
    }

    /// Printed lines, in cart order
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total before discount and tax
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Amount taken off the subtotal
    pub fn discount(&self) -> Money<'static, Currency> {
        self.discount
    }

    /// Tax charged
    pub fn tax(&self) -> Money<'static, Currency> {
        self.tax
    }

    /// Amount charged to the customer
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Discount that was applied
    pub fn discount_percent(&self) -> DiscountPercent {
        self.discount_percent
    }

    /// Tax rate that was applied
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Write the receipt as a table followed by the summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Io`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            writeln!(out, "\nCart is empty.")?;
        } else {
            writeln!(out, "\n{}", self.table())?;
        }

        self.write_summary(&mut out)
    }

    fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Amount"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.amount.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        table.to_string()
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let rows = [
            ("Subtotal:".to_string(), self.subtotal.to_string()),
            (
                format!("Discount ({}):", self.discount_percent),
                self.discount.to_string(),
            ),
            (format!("Tax ({}):", self.tax_rate), self.tax.to_string()),
            ("Total:".to_string(), self.total.to_string()),
        ];

        let label_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();

        let value_width = rows
            .iter()
            .map(|(_, value)| value.chars().count())
            .max()
            .unwrap_or_default();

        for (label, value) in &rows {
            writeln!(out, " {label:>label_width$}  {value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}
