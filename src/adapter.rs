//! Adapter layer: converts between the engine's f64 inputs and the Decimal
//! arithmetic used for allocation percentages.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Convert f64 to Decimal, dropping binary noise (33.3 stays 33.3).
/// Returns `None` for NaN and infinities.
pub fn to_decimal(v: f64) -> Option<Decimal> {
    Decimal::from_f64(v)
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Whole-token share of `total`: floor(total * percentage / 100).
pub fn token_share(total: u64, percentage: Decimal) -> u64 {
    let share = Decimal::from(total)
        .checked_mul(percentage)
        .map(|v| v / dec!(100))
        .unwrap_or(Decimal::ZERO);
    share.floor().to_u64().unwrap_or(0)
}
