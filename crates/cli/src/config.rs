//! CLI configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Shopfront command line configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Browse the catalog and fill a cart", long_about = None)]
pub struct ShopConfig {
    /// YAML catalog to load instead of the built-in demo catalog.
    #[arg(long, env = "SHOPFRONT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List every product in the catalog.
    Products,

    /// Add products to a cart and print the receipt.
    Cart {
        /// Product key to add; repeat to add several, in order.
        #[arg(short, long = "add", value_name = "KEY")]
        add: Vec<String>,

        /// Place the order once the products are added.
        #[arg(long)]
        order: bool,
    },
}

impl ShopConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
