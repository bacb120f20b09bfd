//! Shopfront command line

use std::io;

use anyhow::Result;
use tracing::debug;

use shopfront::catalog::Catalog;

use crate::config::{Command, ShopConfig};

mod commands;
mod config;
mod observability;

/// Shopfront CLI entry point
pub fn main() -> Result<()> {
    let config = ShopConfig::load().unwrap_or_else(|error| error.exit());

    observability::init(&config.logging)?;

    let catalog = match config.catalog.as_deref() {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::demo()?,
    };

    debug!(products = catalog.len(), "catalog ready");

    let stdout = io::stdout();
    let handle = stdout.lock();

    match config.command {
        Command::Products => commands::products(&catalog, handle)?,
        Command::Cart { add, order } => {
            commands::cart(&catalog, &add, order, handle)?;
        }
    }

    Ok(())
}
