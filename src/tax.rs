//! Tax
//!
//! Tax is charged at one of two tiers depending on how the customer pays:
//! card and mobile payments take the lower rate, cash the higher one.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised by tax configuration.
#[derive(Debug, Error, PartialEq)]
pub enum TaxError {
    /// Tax rate fraction is outside 0-1.
    #[error("tax rate {0} is outside the range 0-1")]
    OutOfRange(Decimal),

    /// Payment method name was not recognised.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

/// How the customer pays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[serde(alias = "credit-card")]
    Card,

    /// Mobile wallet payment.
    #[serde(alias = "mobile-payment")]
    Mobile,

    /// Cash.
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::Mobile => "Mobile Payment",
            PaymentMethod::Cash => "Cash",
        })
    }
}

impl FromStr for PaymentMethod {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        match normalised.as_str() {
            "card" | "creditcard" | "debitcard" => Ok(PaymentMethod::Card),
            "mobile" | "mobilepayment" => Ok(PaymentMethod::Mobile),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(TaxError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

/// A tax rate expressed as a fraction, e.g. `0.16` for 16%.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a tax rate from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::OutOfRange`] if `fraction` is not within 0-1.
    pub fn new(fraction: Decimal) -> Result<Self, TaxError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(TaxError::OutOfRange(fraction));
        }

        Ok(Self(fraction))
    }

    /// Zero tax.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The rate as a fraction
    pub fn fraction(self) -> Decimal {
        self.0
    }

    /// The rate in percent points, e.g. `16` for 16%.
    pub fn points(self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// Tax charged on `amount`.
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.points().normalize())
    }
}

/// The rate applied to each payment method.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaxTiers {
    card: TaxRate,
    mobile: TaxRate,
    cash: TaxRate,
    unset: PaymentMethod,
}

impl TaxTiers {
    /// Create tax tiers.
    ///
    /// `unset` names the payment method whose rate applies before the
    /// customer has chosen one.
    pub fn new(card: TaxRate, mobile: TaxRate, cash: TaxRate, unset: PaymentMethod) -> Self {
        Self {
            card,
            mobile,
            cash,
            unset,
        }
    }

    /// Returns the tier used when no payment method has been chosen.
    pub fn unset(&self) -> PaymentMethod {
        self.unset
    }

    /// Returns the tax rate for a payment method, or the default tier if none is selected.
    pub fn select(&self, payment_method: Option<PaymentMethod>) -> TaxRate {
        match payment_method.unwrap_or(self.unset) {
            PaymentMethod::Card => self.card,
            PaymentMethod::Mobile => self.mobile,
            PaymentMethod::Cash => self.cash,
        }
    }
}

impl Default for TaxTiers {
    /// 4% for card and mobile, 16% for cash, cash before a method is chosen.
    fn default() -> Self {
        let lower = TaxRate(Decimal::new(4, 2));
        let higher = TaxRate(Decimal::new(16, 2));

        Self::new(lower, lower, higher, PaymentMethod::Cash)
    }
}

/// Looks up the tax rate for a payment method using the default tiers.
pub fn select_tax_rate(payment_method: Option<PaymentMethod>) -> TaxRate {
    TaxTiers::default().select(payment_method)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn card_and_mobile_use_lower_tier() {
        assert_eq!(
            select_tax_rate(Some(PaymentMethod::Card)).fraction(),
            Decimal::new(4, 2)
        );
        assert_eq!(
            select_tax_rate(Some(PaymentMethod::Mobile)).fraction(),
            Decimal::new(4, 2)
        );
    }

    #[test]
    fn cash_uses_higher_tier() {
        assert_eq!(
            select_tax_rate(Some(PaymentMethod::Cash)).fraction(),
            Decimal::new(16, 2)
        );
    }

    #[test]
    fn unset_defaults_to_cash_rate() {
        assert_eq!(select_tax_rate(None), select_tax_rate(Some(PaymentMethod::Cash)));
    }

    #[test]
    fn unset_tier_is_configurable() -> TestResult {
        let tiers = TaxTiers::new(
            TaxRate::new(Decimal::new(4, 2))?,
            TaxRate::new(Decimal::new(5, 2))?,
            TaxRate::new(Decimal::new(16, 2))?,
            PaymentMethod::Card,
        );

        assert_eq!(tiers.select(None).fraction(), Decimal::new(4, 2));
        assert_eq!(
            tiers.select(Some(PaymentMethod::Mobile)).fraction(),
            Decimal::new(5, 2)
        );

        Ok(())
    }

    #[test]
    fn tax_rate_rejects_out_of_range() {
        assert_eq!(
            TaxRate::new(Decimal::new(-1, 2)),
            Err(TaxError::OutOfRange(Decimal::new(-1, 2)))
        );
        assert_eq!(
            TaxRate::new(Decimal::new(101, 2)),
            Err(TaxError::OutOfRange(Decimal::new(101, 2)))
        );
    }

    #[test]
    fn payment_method_parses_screen_labels() -> TestResult {
        assert_eq!("Credit Card".parse::<PaymentMethod>()?, PaymentMethod::Card);
        assert_eq!("Mobile Payment".parse::<PaymentMethod>()?, PaymentMethod::Mobile);
        assert_eq!("cash".parse::<PaymentMethod>()?, PaymentMethod::Cash);
        assert!(matches!(
            "cheque".parse::<PaymentMethod>(),
            Err(TaxError::UnknownPaymentMethod(_))
        ));

        Ok(())
    }

    #[test]
    fn tax_rate_displays_percent_points() -> TestResult {
        assert_eq!(TaxRate::new(Decimal::new(16, 2))?.to_string(), "16%");

        Ok(())
    }
}
