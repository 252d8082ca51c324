//! Currency rounding helpers.
//!
//! All monetary outputs of the engine are rounded to the currency's
//! minor-unit precision (two decimal places) using round-half-up.

use rust_decimal::{Decimal, RoundingStrategy};

/// The number of minor-unit decimal places for monetary amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a monetary amount half-up to minor-unit precision.
///
/// The engine only produces non-negative amounts, for which
/// `MidpointAwayFromZero` is exactly round-half-up.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("82500.005").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("82500.01").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
