//! Subcommand handlers

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;
use tracing::info;

use shopfront::{
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError},
    pricing::format_price,
    receipt::{Receipt, ReceiptError},
};

/// Errors returned by subcommands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A requested product key is not in the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The cart rejected a product.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The receipt could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write the catalog as a table.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn products(catalog: &Catalog<'_>, mut out: impl io::Write) -> Result<(), CommandError> {
    let mut builder = Builder::default();

    builder.push_record(["Key", "Title", "Price", "Description"]);

    for (key, product) in catalog.iter() {
        builder.push_record([
            key.to_string(),
            product.title.clone(),
            format_price(product.price()),
            product.description.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Add the given products to a fresh cart, in order, and write the receipt.
///
/// Every key is resolved before anything is added, so an unknown key adds nothing.
///
/// # Errors
///
/// Returns an error if a key is unknown, the cart rejects a product, or the output
/// cannot be written.
pub fn cart<'a>(
    catalog: &Catalog<'a>,
    keys: &[String],
    order: bool,
    mut out: impl io::Write,
) -> Result<Cart<'a>, CommandError> {
    let products = keys
        .iter()
        .map(|key| catalog.get(key))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cart = Cart::new(catalog.currency());

    for product in products {
        cart.add_item(product.clone())?;
    }

    info!(
        items = cart.len(),
        total = %format_price(&cart.total()),
        "cart filled"
    );

    Receipt::from_cart(&cart).write_to(&mut out)?;

    if order {
        let placed = cart.order();

        writeln!(
            out,
            "\nOrdered {} item(s) for {}.",
            placed.items.len(),
            format_price(&placed.total)
        )?;
    }

    Ok(cart)
}
