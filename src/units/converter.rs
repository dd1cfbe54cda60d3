//! Unit conversion functions
//!
//! Raw amounts are converted to milliliters exactly once, before any scaling.
//! Rounding happens only at the display edges.

use super::volume::{VolumeUnit, ML_PER_OZ};

/// Round to `decimals` places, halves away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest quarter, matching jigger markings
pub fn round_to_quarter(value: f64) -> f64 {
    (value * 4.0).round() / 4.0
}

/// Convert an amount in the given unit to milliliters
pub fn to_milliliters(amount: f64, unit: VolumeUnit) -> f64 {
    amount * unit.ml_factor()
}

/// Convert milliliters to fluid ounces, rounded to 2 decimals
pub fn milliliters_to_ounces(ml: f64) -> f64 {
    round_to(ml / ML_PER_OZ, 2)
}

/// Convert fluid ounces to milliliters, rounded to the nearest whole milliliter
pub fn ounces_to_milliliters(oz: f64) -> f64 {
    (oz * ML_PER_OZ).round()
}
