//! Fixed-point money values.

use rust_decimal::Decimal;

/// Prices and unit costs, always carried with two fractional digits.
pub type Price = Decimal;

/// Number of fractional digits every stored price carries.
pub const PRICE_SCALE: u32 = 2;

/// Largest accepted price, ten digits in total: `99999999.99`.
pub const MAX_PRICE: Price = Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE);

/// Checks a price and rescales it to exactly two fractional digits.
///
/// Negative values, values above [`MAX_PRICE`] and values with more than two
/// fractional digits are rejected rather than rounded.
pub fn normalize_price(field: &str, value: Decimal) -> Result<Price, String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("{field} must not be negative, got {value}"));
    }
    let mut normalized = value.normalize();
    if normalized.scale() > PRICE_SCALE {
        return Err(format!(
            "{field} allows at most {PRICE_SCALE} decimal places, got {value}"
        ));
    }
    normalized.rescale(PRICE_SCALE);
    // rescale leaves the scale alone when the mantissa has no room left
    if normalized.scale() != PRICE_SCALE {
        return Err(format!("{field} is too large to carry two decimal places, got {value}"));
    }
    if normalized > MAX_PRICE {
        return Err(format!("{field} must be at most {MAX_PRICE}, got {value}"));
    }
    // -0.00 compares equal to zero but prints with a sign
    normalized.set_sign_positive(true);
    Ok(normalized)
}
