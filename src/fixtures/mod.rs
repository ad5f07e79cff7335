//! Fixtures
//!
//! Menus, pricing settings and sample orders stored as YAML files under a
//! base directory:
//!
//! ```text
//! fixtures/
//!   menus/<name>.yml
//!   pricing/<name>.yml
//!   orders/<name>.yml
//! ```

use std::{fs, path::PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::CartError,
    discounts::DiscountError,
    fixtures::{menus::MenuFixture, orders::OrderFixture, pricing::PricingFixture},
    menu::{Menu, MenuError},
    order::OrderError,
    pricing::PricingConfig,
    tax::TaxError,
};

pub mod menus;
pub mod orders;
pub mod pricing;

pub use orders::OrderDraft;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between menu items
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Menu fixture has no items, so its currency is unknown
    #[error("Menu has no items; currency unknown")]
    EmptyMenu,

    /// An order was loaded before any menu
    #[error("No menu loaded; cannot resolve order lines")]
    NoMenu,

    /// Menu construction or lookup error
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Cart construction error
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Discount configuration error
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Tax configuration error
    #[error(transparent)]
    Tax(#[from] TaxError),

    /// Order data error
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    menu: Option<Menu>,

    pricing: Option<PricingConfig>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            menu: None,
            pricing: None,
        }
    }

    /// Load a menu from `menus/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the menu is invalid.
    pub fn load_menu(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: MenuFixture = self.read("menus", name)?;
        let menu = fixture.into_menu()?;

        debug!(name, items = menu.len(), "loaded menu fixture");

        self.menu = Some(menu);

        Ok(self)
    }

    /// Load discount and tax settings from `pricing/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a rate is out of range.
    pub fn load_pricing(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PricingFixture = self.read("pricing", name)?;
        let pricing = PricingConfig::try_from(fixture)?;

        debug!(name, discount = %pricing.discount(), "loaded pricing fixture");

        self.pricing = Some(pricing);

        Ok(self)
    }

    /// Load a sample order from `orders/<name>.yml`, resolving its lines against the loaded menu
    ///
    /// # Errors
    ///
    /// Returns an error if no menu is loaded, the file cannot be read or parsed,
    /// or a line refers to an item that is not on the menu.
    pub fn load_order(&self, name: &str) -> Result<OrderDraft, FixtureError> {
        let menu = self.menu()?;
        let fixture: OrderFixture = self.read("orders", name)?;

        fixture.into_draft(menu)
    }

    /// The loaded menu
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoMenu`] if no menu has been loaded.
    pub fn menu(&self) -> Result<&Menu, FixtureError> {
        self.menu.as_ref().ok_or(FixtureError::NoMenu)
    }

    /// The loaded pricing settings, or the defaults if none were loaded.
    pub fn pricing(&self) -> PricingConfig {
        self.pricing.unwrap_or_default()
    }

    fn read<T: DeserializeOwned>(&self, kind: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Ok(serde_norway::from_str(&contents)?)
    }
}
