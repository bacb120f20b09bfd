//! Fixtures
//!
//! YAML catalog fixtures. A fixture file holds an ordered list of products; see
//! `fixtures/products/demo.yml` for the layout.

use thiserror::Error;

pub mod products;

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

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product priced below zero
    #[error("Product {0} has a negative price")]
    NegativePrice(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// The same product key appears twice
    #[error("Duplicate product key: {0}")]
    DuplicateProduct(String),

    /// No products in fixture
    #[error("No products in fixture; currency unknown")]
    NoProducts,
}
