//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, pricing::format_price};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A single priced line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Product title.
    pub title: String,

    /// Price formatted for display.
    pub price: String,
}

/// Printable summary of a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<'a> {
    lines: Vec<ReceiptLine>,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Capture the current lines and total of a cart.
    pub fn from_cart(cart: &Cart<'a>) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| ReceiptLine {
                title: item.title.clone(),
                price: format_price(item.price()),
            })
            .collect();

        Receipt {
            lines,
            total: cart.total(),
        }
    }

    /// Lines in the order their items were added.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Exact total.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Writes the receipt as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            writeln!(out, "\nYour cart is empty.")?;
        } else {
            let mut builder = Builder::default();

            builder.push_record(["#", "Item", "Price"]);

            for (position, line) in self.lines.iter().enumerate() {
                builder.push_record([
                    (position + 1).to_string(),
                    line.title.clone(),
                    line.price.clone(),
                ]);
            }

            let mut table = builder.build();

            table.with(Style::modern_rounded());
            table.modify(Rows::first(), Color::BOLD);
            table.modify(Columns::new(2..3), Alignment::right());

            writeln!(out, "\n{table}")?;
        }

        writeln!(out, " \x1b[1mTotal:\x1b[0m {}", format_price(&self.total))?;

        Ok(())
    }
}
