//! Pricing Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    discounts::DiscountPercent,
    fixtures::FixtureError,
    pricing::PricingConfig,
    tax::{PaymentMethod, TaxRate, TaxTiers},
};

/// Discount and tax settings in YAML
#[derive(Debug, Default, Deserialize)]
pub struct PricingFixture {
    /// Discount in percent points, with or without `%` (e.g., "5%" or "5"); defaults to 5%
    #[serde(default)]
    pub discount: Option<String>,

    /// Tax tiers; default to 4% card/mobile and 16% cash
    #[serde(default)]
    pub tax: Option<TaxFixture>,
}

/// Tax tiers in YAML
#[derive(Debug, Deserialize)]
pub struct TaxFixture {
    /// Rate for card payments
    pub card: String,

    /// Rate for mobile payments
    pub mobile: String,

    /// Rate for cash payments
    pub cash: String,

    /// Which tier applies before a payment method is chosen
    #[serde(default = "unset_tier")]
    pub unset: PaymentMethod,
}

fn unset_tier() -> PaymentMethod {
    PaymentMethod::Cash
}

impl TryFrom<TaxFixture> for TaxTiers {
    type Error = FixtureError;

    fn try_from(fixture: TaxFixture) -> Result<Self, Self::Error> {
        Ok(TaxTiers::new(
            TaxRate::new(parse_percentage(&fixture.card)?)?,
            TaxRate::new(parse_percentage(&fixture.mobile)?)?,
            TaxRate::new(parse_percentage(&fixture.cash)?)?,
            fixture.unset,
        ))
    }
}

impl TryFrom<PricingFixture> for PricingConfig {
    type Error = FixtureError;

    fn try_from(fixture: PricingFixture) -> Result<Self, Self::Error> {
        let discount = match fixture.discount {
            Some(discount) => discount.parse::<DiscountPercent>()?,
            None => DiscountPercent::default(),
        };

        let tax_tiers = match fixture.tax {
            Some(tax) => TaxTiers::try_from(tax)?,
            None => TaxTiers::default(),
        };

        Ok(PricingConfig::new(discount, tax_tiers))
    }
}

/// Parse a tax rate string (e.g., "15%" or "0.15") into a fraction
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal.
pub fn parse_percentage(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let value = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(value / Decimal::ONE_HUNDRED)
    } else {
        trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))
    }
}
