//! Decimal rounding for money and rate percentages.
//!
//! Two separate rounding contexts: currency amounts are rounded to cents, and
//! the applied rate is scaled to a percentage before it is rounded. Both use
//! round-half-to-even.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

/// Fractional digits kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Fractional digits kept for a rate expressed as a percentage.
pub const PERCENT_SCALE: u32 = 2;

/// Rounds a currency amount to cents using banker's rounding.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_calculation_api::utils::rounding::round_currency;
///
/// assert_eq!(round_currency(dec!(10.125)), dec!(10.12));
/// assert_eq!(round_currency(dec!(10.126)), dec!(10.13));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Converts a fractional rate (`0.085`) to a rounded percentage (`8.5`).
pub fn rate_as_percentage(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).round_dp_with_strategy(PERCENT_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Serializes a [`Decimal`] as a JSON number instead of a string.
///
/// The decimal's canonical string is parsed into the nearest `f64`, so a
/// value such as `217.04` is written as `217.04` with no binary noise.
///
/// `f64` holds about 15 significant digits. Amounts with more digits than
/// that (e.g. above a trillion with cents, or sub-cent prices with many
/// decimals) are written rounded to the nearest `f64`, silently.
pub fn as_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number: f64 = value
        .normalize()
        .to_string()
        .parse()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_to_even() {
        assert_eq!(round_currency(dec!(10.125)), dec!(10.12));
        assert_eq!(round_currency(dec!(10.135)), dec!(10.14));
        assert_eq!(round_currency(dec!(10.126)), dec!(10.13));
        assert_eq!(round_currency(dec!(10.123)), dec!(10.12));
    }

    #[test]
    fn test_round_currency_keeps_exact_values() {
        assert_eq!(round_currency(dec!(200)), dec!(200));
        assert_eq!(round_currency(dec!(17.04)), dec!(17.04));
    }

    #[test]
    fn test_rate_as_percentage() {
        assert_eq!(rate_as_percentage(dec!(0.085)), dec!(8.5));
        assert_eq!(rate_as_percentage(dec!(0.0852)), dec!(8.52));
        assert_eq!(rate_as_percentage(dec!(0.0700)), dec!(7));
        assert_eq!(rate_as_percentage(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_rounding_is_independent_of_currency() {
        // 0.08525 -> 8.525% -> 8.52 (half to even), not a cent-rounded rate
        assert_eq!(rate_as_percentage(dec!(0.08525)), dec!(8.52));
        assert_eq!(round_currency(dec!(0.08525)), dec!(0.09));
    }

    #[test]
    fn test_as_number_writes_json_number() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "as_number")]
            amount: Decimal,
        }

        let json = serde_json::to_value(Wrapper {
            amount: dec!(217.04),
        })
        .unwrap();
        assert_eq!(json["amount"], 217.04);

        let json = serde_json::to_value(Wrapper {
            amount: dec!(200.00),
        })
        .unwrap();
        assert_eq!(json["amount"], 200.0);
    }

    #[test]
    fn test_as_number_loses_digits_beyond_f64_precision() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "as_number")]
            amount: Decimal,
        }

        let json = serde_json::to_value(Wrapper {
            amount: dec!(1234567890123456.78),
        })
        .unwrap();
        assert_ne!(json["amount"].to_string(), "1234567890123456.78");
        assert_eq!(json["amount"], 1234567890123456.8);
    }
}
