//! Freeze classification

use crate::models::FreezeStatus;

/// Below this ABV a batch freezes solid
pub const FREEZE_THRESHOLD: f64 = 15.0;
/// At or above this ABV a batch stays pourable
pub const SLUSHY_THRESHOLD: f64 = 22.0;

/// Classify a final ABV (percent). Each boundary belongs to the band above it.
pub fn classify_freeze(abv: f64) -> FreezeStatus {
    if abv < FREEZE_THRESHOLD {
        FreezeStatus::Freeze
    } else if abv < SLUSHY_THRESHOLD {
        FreezeStatus::Slushy
    } else {
        FreezeStatus::Safe
    }
}
