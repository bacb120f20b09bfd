//! Shopfront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartItem, CartSnapshot},
    catalog::{Catalog, CatalogError},
    fixtures::FixtureError,
    pricing::{TotalPriceError, format_price, total_price},
    products::{Product, ProductKey},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
