//! Display rounding for report values

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Decimal places used for percentage changes
pub const CHANGE_PRECISION: u32 = 2;

/// Round a computed value for display.
///
/// Returns `None` for non-finite input or values outside the decimal range.
pub fn to_display(value: f64, precision: u32) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.round_dp(precision).normalize())
}
