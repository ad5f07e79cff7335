//! Till configuration

use std::path::PathBuf;

use clap::{Args, Parser};

use till::prelude::{Category, CustomerNumber, DiscountPercent, MenuItemId, PaymentMethod};

/// Till configuration
#[derive(Debug, Parser)]
#[command(name = "till", about = "Price a restaurant order", long_about = None)]
pub(crate) struct TillConfig {
    /// Fixture selection.
    #[command(flatten)]
    pub fixtures: FixtureArgs,

    /// The order to price.
    #[command(flatten)]
    pub order: OrderArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl TillConfig {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Which fixture files to load.
#[derive(Debug, Args)]
pub(crate) struct FixtureArgs {
    /// Fixture base directory
    #[arg(long = "fixtures", env = "TILL_FIXTURES", default_value = "./fixtures")]
    pub base_path: PathBuf,

    /// Menu fixture name
    #[arg(long, env = "TILL_MENU", default_value = "restaurant")]
    pub menu: String,

    /// Pricing fixture name
    #[arg(long, env = "TILL_PRICING", default_value = "default")]
    pub pricing: String,
}

/// Cart contents and checkout details.
#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Order fixture to start from
    #[arg(long)]
    pub order: Option<String>,

    /// Add one unit of a menu item (repeatable)
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<MenuItemId>,

    /// Remove one unit of a menu item (repeatable, applied after additions)
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<MenuItemId>,

    /// Payment method (card, mobile, cash)
    #[arg(short, long)]
    pub payment: Option<PaymentMethod>,

    /// Override the fixture discount, in percent points
    #[arg(short, long)]
    pub discount: Option<DiscountPercent>,

    /// Customer number; with a payment method, checks the order out
    #[arg(short, long)]
    pub customer: Option<CustomerNumber>,

    /// Print the menu for one category before the receipt
    #[arg(long)]
    pub category: Option<Category>,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
