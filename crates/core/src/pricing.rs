//! Prices

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::products::Product;

/// Number of decimal places shown to users.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The running sum no longer fits in a decimal.
    #[error("total price overflowed while adding item {0}")]
    Overflow(usize),

    /// An item's currency differs from the requested currency (index, item currency, currency).
    #[error("Item {0} has currency {1}, but total is in {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// Calculates the total price of a list of products.
///
/// The sum is exact; no rounding is applied. An empty list totals zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the sum does not fit in a decimal.
/// - [`TotalPriceError::CurrencyMismatch`]: a product is priced in another currency.
pub fn total_price<'a>(
    products: &[Product<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let sum = products
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (i, product)| {
            let product_currency = product.price().currency();

            if product_currency != currency {
                return Err(TotalPriceError::CurrencyMismatch(
                    i,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            acc.checked_add(*product.price().amount())
                .ok_or(TotalPriceError::Overflow(i))
        })?;

    Ok(Money::from_decimal(sum, currency))
}

/// Format a money amount for display, rounded to two decimal places.
///
/// Midpoints round away from zero, so `0.125` shows as `0.13`.
pub fn format_price(money: &Money<'_, Currency>) -> String {
    let rounded = money
        .amount()
        .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let magnitude = rounded.abs();
    let currency_code = money.currency().iso_alpha_code;

    let symbol = match currency_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{magnitude:.2} {currency_code}")
    } else {
        format!("{sign}{symbol}{magnitude:.2}")
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, JPY, USD};
    use testresult::TestResult;

    use super::*;

    fn product(amount: Decimal, currency: &Currency) -> Product<'_> {
        Product::new("Thing", "", "", Money::from_decimal(amount, currency))
    }

    #[test]
    fn total_price_sums_exactly() -> TestResult {
        let products = [
            product(Decimal::new(1999, 2), USD),
            product(Decimal::new(8999, 2), USD),
        ];

        let total = total_price(&products, USD)?;

        assert_eq!(total.amount(), &Decimal::new(10998, 2));
        assert_eq!(total.currency(), USD);

        Ok(())
    }

    #[test]
    fn total_price_empty_is_zero() -> TestResult {
        let total = total_price(&[], GBP)?;

        assert_eq!(total, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn total_price_keeps_sub_cent_precision() -> TestResult {
        let products = [
            product(Decimal::new(1, 3), USD),
            product(Decimal::new(1, 3), USD),
            product(Decimal::new(1, 3), USD),
        ];

        let total = total_price(&products, USD)?;

        assert_eq!(total.amount(), &Decimal::new(3, 3));

        Ok(())
    }

    #[test]
    fn total_price_rejects_foreign_currency() {
        let products = [
            product(Decimal::new(100, 2), USD),
            product(Decimal::new(100, 2), GBP),
        ];

        let result = total_price(&products, USD);

        assert_eq!(
            result,
            Err(TotalPriceError::CurrencyMismatch(1, "GBP", "USD"))
        );
    }

    #[test]
    fn total_price_reports_overflow() {
        let products = [product(Decimal::MAX, USD), product(Decimal::MAX, USD)];

        let result = total_price(&products, USD);

        assert_eq!(result, Err(TotalPriceError::Overflow(1)));
    }

    #[test]
    fn format_price_rounds_to_two_places() {
        let money = Money::from_decimal(Decimal::new(109_979, 3), USD);

        assert_eq!(format_price(&money), "$109.98");
    }

    #[test]
    fn format_price_rounds_midpoint_away_from_zero() {
        let money = Money::from_decimal(Decimal::new(125, 3), GBP);

        assert_eq!(format_price(&money), "£0.13");
    }

    #[test]
    fn format_price_pads_zero() {
        assert_eq!(format_price(&Money::from_minor(0, USD)), "$0.00");
    }

    #[test]
    fn format_price_negative_amount() {
        let money = Money::from_decimal(Decimal::new(-250, 2), USD);

        assert_eq!(format_price(&money), "-$2.50");
    }

    #[test]
    fn format_price_unknown_symbol_uses_code() {
        let money = Money::from_decimal(Decimal::new(500, 0), JPY);

        assert_eq!(format_price(&money), "500.00 JPY");
    }
}
