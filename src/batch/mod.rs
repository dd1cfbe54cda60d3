//! Batch calculation engines
//!
//! Both engines are pure functions of their inputs and return the shared
//! `BatchResult` shape.

mod freeform;
mod freeze;
mod recipe;
mod reference;

pub use freeform::compute_freeform_batch;
pub use freeze::{classify_freeze, FREEZE_THRESHOLD, SLUSHY_THRESHOLD};
pub use recipe::compute_recipe_batch;
pub use reference::compute_reference_batch;

/// Standard spirit bottle, milliliters
pub const STANDARD_BOTTLE_ML: f64 = 750.0;
/// One 3 oz serving, milliliters
pub const SERVING_SIZE_ML: f64 = 90.0;

/// Whole servings poured from a bottle
pub fn servings_for(bottle_volume_ml: f64) -> u32 {
    (bottle_volume_ml / SERVING_SIZE_ML).floor().max(0.0) as u32
}
