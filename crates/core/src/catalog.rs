//! Catalog

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    fixtures::{
        FixtureError,
        products::{ProductsFixture, parse_price},
    },
    products::{Product, ProductKey},
};

const DEMO_PRODUCTS_YAML: &str = include_str!("../../../fixtures/products/demo.yml");

/// Errors raised when looking up catalog products.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product is stored under the given key.
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// An ordered, read-only list of purchasable products.
#[derive(Debug)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,

    /// Fixture keys in display order.
    order: Vec<(String, ProductKey)>,

    product_keys: FxHashMap<String, ProductKey>,

    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// The built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded fixture fails to parse.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_yaml(DEMO_PRODUCTS_YAML)
    }

    /// Load a catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading catalog");

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML fixture content.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is invalid or negative, product
    /// currencies disagree, a key is repeated, or there are no products at all.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        let mut products = SlotMap::with_key();
        let mut order = Vec::with_capacity(fixture.products.len());
        let mut product_keys = FxHashMap::default();
        let mut currency: Option<&'static Currency> = None;

        for product_fixture in fixture.products {
            let (_amount, parsed_currency) = parse_price(&product_fixture.price)?;

            if let Some(existing_currency) = currency
                && existing_currency != parsed_currency
            {
                return Err(FixtureError::CurrencyMismatch(
                    existing_currency.iso_alpha_code.to_string(),
                    parsed_currency.iso_alpha_code.to_string(),
                ));
            }

            currency = Some(parsed_currency);

            if product_keys.contains_key(&product_fixture.key) {
                return Err(FixtureError::DuplicateProduct(product_fixture.key));
            }

            let key = product_fixture.key.clone();
            let product: Product<'a> = product_fixture.try_into()?;
            let product_key = products.insert(product);

            product_keys.insert(key.clone(), product_key);
            order.push((key, product_key));
        }

        let currency = currency.ok_or(FixtureError::NoProducts)?;

        debug!(
            products = order.len(),
            currency = currency.iso_alpha_code,
            "catalog loaded"
        );

        Ok(Catalog {
            products,
            order,
            product_keys,
            currency,
        })
    }

    /// Get a product by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` if no product has that key.
    pub fn get(&self, key: &str) -> Result<&Product<'a>, CatalogError> {
        self.product_keys
            .get(key)
            .and_then(|product_key| self.products.get(*product_key))
            .ok_or_else(|| CatalogError::ProductNotFound(key.to_string()))
    }

    /// Iterate over `(fixture key, product)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Product<'a>)> {
        self.order.iter().filter_map(|(key, product_key)| {
            self.products
                .get(*product_key)
                .map(|product| (key.as_str(), product))
        })
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the currency every product in the catalog is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
