//! Shopfront
//!
//! Shopfront is a small shopping-cart engine: a product catalog, a cart that keeps an exact
//! running total, and the formatting needed to show both to a user.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
