//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product title
    pub title: String,

    /// Product image URL
    pub image_url: String,

    /// Product description
    pub description: String,

    /// Product price
    pub price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Creates a new product.
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: description.into(),
            price,
        }
    }

    /// Returns the price of the product
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
