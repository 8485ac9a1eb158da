//! Pricing

use rust_decimal::Decimal;

/// Format a minor-unit amount as dollars: `$` prefix, two decimals, no
/// thousands separators.
pub fn format_price(minor_units: i64) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };

    format!("{sign}${major_units}.{fractional:02}")
}

/// Price of `quantity` units, saturating instead of overflowing.
pub fn line_total(unit_price_minor: i64, quantity: u32) -> i64 {
    unit_price_minor.saturating_mul(i64::from(quantity))
}

/// Convert minor units into a two-place decimal in major units.
pub fn to_major_units(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, 2)
}
