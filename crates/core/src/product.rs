//! Product constants and payload validation.
//!
//! Pure functions used by the API before any statement reaches the database.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log fields.
pub const ENTITY: &str = "Product";

/// Decimal places stored for `price` (`NUMERIC(15,2)`).
pub const PRICE_SCALE: u32 = 2;

/// Integer digits allowed in `price`.
///
/// Prices go out as JSON numbers (f64). Any decimal with at most 15
/// significant digits survives the f64 round trip unchanged, so the integer
/// part is capped at `15 - PRICE_SCALE` digits.
pub const PRICE_INTEGER_DIGITS: u32 = 13;

/// Exclusive upper bound for `price` (`10^PRICE_INTEGER_DIGITS`).
pub fn price_limit() -> Decimal {
    Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS))
}

/// Validate a product price.
///
/// Rules:
/// - must not be negative
/// - at most [`PRICE_SCALE`] significant decimal places (trailing zeros are fine)
/// - must be below [`price_limit`]
pub fn validate_price(price: &Decimal) -> Result<(), CoreError> {
    if *price < Decimal::ZERO {
        return Err(CoreError::Validation(
            "Price must not be negative".to_string(),
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(CoreError::Validation(format!(
            "Price must have at most {PRICE_SCALE} decimal places"
        )));
    }
    let limit = price_limit();
    if *price >= limit {
        return Err(CoreError::Validation(format!(
            "Price must be less than {limit}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn price_limit_is_ten_to_the_thirteenth() {
        assert_eq!(price_limit(), dec("10000000000000"));
    }

    #[test]
    fn accepts_typical_price() {
        assert!(validate_price(&dec("9.99")).is_ok());
    }

    #[test]
    fn accepts_zero() {
        assert!(validate_price(&Decimal::ZERO).is_ok());
    }

    #[test]
    fn accepts_trailing_zeros_beyond_scale() {
        assert!(validate_price(&dec("12.5000")).is_ok());
    }

    #[test]
    fn accepts_largest_storable_value() {
        assert!(validate_price(&dec("9999999999999.99")).is_ok());
    }

    #[test]
    fn rejects_negative() {
        assert_matches!(
            validate_price(&dec("-0.01")),
            Err(CoreError::Validation(msg)) if msg.contains("negative")
        );
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert_matches!(
            validate_price(&dec("1.005")),
            Err(CoreError::Validation(msg)) if msg.contains("decimal places")
        );
    }

    #[test]
    fn largest_price_survives_f64_round_trip() {
        use rust_decimal::prelude::ToPrimitive;

        for s in ["9999999999999.99", "1234567890123.45", "0.01", "9.99"] {
            let price = dec(s);
            let as_float = price.to_f64().unwrap();
            assert_eq!(dec(&as_float.to_string()), price, "{s}");
        }
    }

    #[test]
    fn rejects_value_at_limit() {
        assert_matches!(
            validate_price(&price_limit()),
            Err(CoreError::Validation(_))
        );
    }
}
