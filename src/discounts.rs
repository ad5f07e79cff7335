//! Discounts

use std::{fmt, str::FromStr};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors specific to discount configuration.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Discount percentage is outside 0-100.
    #[error("discount of {0}% is outside the range 0-100%")]
    OutOfRange(Decimal),

    /// Discount could not be parsed.
    #[error("invalid discount: {0}")]
    Invalid(String),
}

/// Percentage taken off the cart subtotal before tax.
///
/// Always within 0-100%. Out of range values are rejected rather than clamped.
#[derive(Copy, Clone, PartialEq)]
pub struct DiscountPercent {
    points: Decimal,
    fraction: Percentage,
}

impl DiscountPercent {
    /// No discount.
    pub fn none() -> Self {
        Self {
            points: Decimal::ZERO,
            fraction: Percentage::from(Decimal::ZERO),
        }
    }

    /// Create a discount from percent points, e.g. `5` for 5%.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] if `points` is not within 0-100.
    pub fn new(points: Decimal) -> Result<Self, DiscountError> {
        if points < Decimal::ZERO || points > Decimal::ONE_HUNDRED {
            return Err(DiscountError::OutOfRange(points));
        }

        Ok(Self {
            points,
            fraction: Percentage::from(points / Decimal::ONE_HUNDRED),
        })
    }

    /// Percent points, e.g. `5` for 5%.
    pub fn points(&self) -> Decimal {
        self.points
    }

    /// The discount as a fractional percentage.
    pub fn percentage(&self) -> Percentage {
        self.fraction
    }

    /// The discount taken off `amount`.
    pub fn of(&self, amount: Decimal) -> Decimal {
        self.fraction * amount
    }
}

impl Default for DiscountPercent {
    /// 5%, the order screen's standing discount.
    fn default() -> Self {
        Self {
            points: Decimal::new(5, 0),
            fraction: Percentage::from(Decimal::new(5, 2)),
        }
    }
}

impl fmt::Debug for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiscountPercent").field(&self.points).finish()
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.points.normalize())
    }
}

impl FromStr for DiscountPercent {
    type Err = DiscountError;

    /// Parses percent points, with or without a trailing `%` (`"5"`, `"12.5%"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let points = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

        let points = points
            .parse::<Decimal>()
            .map_err(|_err| DiscountError::Invalid(s.to_string()))?;

        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            DiscountPercent::new(Decimal::new(-1, 0)),
            Err(DiscountError::OutOfRange(Decimal::new(-1, 0)))
        );
        assert_eq!(
            DiscountPercent::new(Decimal::new(1001, 1)),
            Err(DiscountError::OutOfRange(Decimal::new(1001, 1)))
        );
    }

    #[test]
    fn accepts_bounds() -> TestResult {
        let zero = DiscountPercent::new(Decimal::ZERO)?;
        let hundred = DiscountPercent::new(Decimal::ONE_HUNDRED)?;

        assert_eq!(zero.of(Decimal::new(2097, 2)), Decimal::ZERO);
        assert_eq!(hundred.of(Decimal::new(2097, 2)), Decimal::new(2097, 2));

        Ok(())
    }

    #[test]
    fn of_is_exact() -> TestResult {
        let discount = DiscountPercent::new(Decimal::new(5, 0))?;

        assert_eq!(discount.of(Decimal::new(2097, 2)), Decimal::new(10485, 4));

        Ok(())
    }

    #[test]
    fn five_points_is_the_default() -> TestResult {
        let five = DiscountPercent::new(Decimal::new(5, 0))?;

        assert_eq!(five, DiscountPercent::default());
        assert_eq!(five.of(Decimal::ONE_HUNDRED), Decimal::new(5, 0));

        Ok(())
    }

    #[test]
    fn parses_with_and_without_suffix() -> TestResult {
        assert_eq!("5".parse::<DiscountPercent>()?.points(), Decimal::new(5, 0));
        assert_eq!(
            " 12.5% ".parse::<DiscountPercent>()?.points(),
            Decimal::new(125, 1)
        );
        assert!(matches!(
            "lots".parse::<DiscountPercent>(),
            Err(DiscountError::Invalid(_))
        ));
        assert!(matches!(
            "150%".parse::<DiscountPercent>(),
            Err(DiscountError::OutOfRange(_))
        ));

        Ok(())
    }

    #[test]
    fn displays_percent_points() -> TestResult {
        assert_eq!(DiscountPercent::new(Decimal::new(50, 1))?.to_string(), "5%");

        Ok(())
    }
}
