//! Cart

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, info};

use crate::{pricing::format_price, products::Product};

/// A product held in a cart. Carts keep their own copy of each added product.
pub type CartItem<'a> = Product<'a>;

/// Errors raised when a product cannot be added to a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The product has a negative price (title, formatted price).
    #[error("{0} has a negative price of {1}")]
    NegativePrice(String, String),

    /// The product currency differs from the cart currency (title, product currency, cart currency).
    #[error("{0} is priced in {1}, but the cart is in {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// Adding the product would overflow the cart total.
    #[error("adding {0} would overflow the cart total")]
    TotalOverflow(String),
}

/// Cart
///
/// Holds the products added so far, in insertion order, together with their exact total.
/// Items can only be appended; there is no way to remove one once added.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    items: Vec<CartItem<'a>>,
    total: Money<'a, Currency>,
    currency: &'a Currency,
}

/// Read-only view of a cart for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSnapshot<'c, 'a> {
    /// Items in the order they were added.
    pub items: &'c [CartItem<'a>],

    /// Exact sum of item prices.
    pub total: Money<'a, Currency>,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            items: Vec::new(),
            total: Money::from_decimal(Decimal::ZERO, currency),
            currency,
        }
    }

    /// Append a product to the end of the cart and update the total.
    ///
    /// The cart is left untouched when the product is rejected.
    ///
    /// # Errors
    ///
    /// - [`CartError::NegativePrice`]: the product price is below zero.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::TotalOverflow`]: the new total does not fit in a decimal.
    pub fn add_item(&mut self, product: Product<'a>) -> Result<(), CartError> {
        let price = product.price;
        let currency = self.currency;

        if price.currency() != currency {
            return Err(CartError::CurrencyMismatch(
                product.title,
                price.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        if *price.amount() < Decimal::ZERO {
            let formatted = format_price(&price);

            return Err(CartError::NegativePrice(product.title, formatted));
        }

        let Some(total) = self.total.amount().checked_add(*price.amount()) else {
            return Err(CartError::TotalOverflow(product.title));
        };

        self.total = Money::from_decimal(total, currency);

        debug!(
            title = %product.title,
            price = %format_price(product.price()),
            items = self.items.len() + 1,
            total = %format_price(&self.total),
            "added item to cart"
        );

        self.items.push(product);

        Ok(())
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Exact sum of the prices of every item in the cart.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Items and total together, for presentation.
    pub fn snapshot(&self) -> CartSnapshot<'_, 'a> {
        CartSnapshot {
            items: &self.items,
            total: self.total,
        }
    }

    /// Place an order for the current contents.
    ///
    /// This only records the intent in the log; the cart is not changed.
    pub fn order(&self) -> CartSnapshot<'_, 'a> {
        info!(
            items = self.items.len(),
            total = %format_price(&self.total),
            "ordering"
        );

        for (position, item) in self.items.iter().enumerate() {
            debug!(
                position,
                title = %item.title,
                price = %format_price(item.price()),
                "order line"
            );
        }

        self.snapshot()
    }

    /// Get the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}
