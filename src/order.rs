//! Orders
//!
//! A checked-out cart, ready to be handed to payment.

use std::{fmt, num::NonZeroU64, str::FromStr};

use jiff::civil::Date;
use thiserror::Error;
use tracing::info;

use crate::{
    cart::Cart,
    pricing::{PricingConfig, Totals},
    receipt::{Receipt, ReceiptError},
    tax::PaymentMethod,
};

/// Errors raised at checkout.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The customer number is not a positive integer.
    #[error("customer number must be a valid positive integer, got {0:?}")]
    InvalidCustomerNumber(String),

    /// Nothing has been added to the cart.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The receipt could not be built.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Customer reference entered on the order screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CustomerNumber(NonZeroU64);

impl CustomerNumber {
    /// Creates a customer number.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidCustomerNumber`] if `number` is zero.
    pub fn new(number: u64) -> Result<Self, OrderError> {
        NonZeroU64::new(number)
            .map(Self)
            .ok_or_else(|| OrderError::InvalidCustomerNumber(number.to_string()))
    }

    /// Returns the raw number.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for CustomerNumber {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU64>()
            .map(Self)
            .map_err(|_err| OrderError::InvalidCustomerNumber(s.to_string()))
    }
}

impl fmt::Display for CustomerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed order with its computed totals.
#[derive(Debug, Clone)]
pub struct Order {
    cart: Cart,
    totals: Totals,
    receipt: Receipt,
    payment_method: PaymentMethod,
    customer: CustomerNumber,
    date: Date,
}

impl Order {
    /// Check out `cart`, pricing it for the chosen payment method.
    ///
    /// # Errors
    ///
    /// - [`OrderError::EmptyCart`]: the cart has no lines.
    /// - [`OrderError::Receipt`]: an amount could not be rounded for presentation.
    pub fn checkout(
        cart: Cart,
        config: &PricingConfig,
        payment_method: PaymentMethod,
        customer: CustomerNumber,
        date: Date,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let totals = config.totals(&cart, Some(payment_method));
        let receipt = Receipt::new(&cart, &totals)?;

        info!(
            %customer,
            %payment_method,
            %date,
            total = %receipt.total(),
            "order checked out"
        );

        Ok(Self {
            cart,
            totals,
            receipt,
            payment_method,
            customer,
            date,
        })
    }

    /// The cart that was checked out
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Unrounded totals
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Rounded receipt
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// How the customer paid
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Customer reference
    pub fn customer(&self) -> CustomerNumber {
        self.customer
    }

    /// Order date
    pub fn date(&self) -> Date {
        self.date
    }
}
