//! Freezer Batch Library
//!
//! Converts a full bottle of base spirit into a freezer-ready cocktail batch:
//! pour-off, ingredients to add back, dilution water, final ABV and a freeze
//! classification.

pub mod about;
pub mod batch;
pub mod config;
pub mod data;
pub mod mcp;
pub mod models;
pub mod suggest;
pub mod tools;
pub mod units;

pub use batch::{
    classify_freeze, compute_freeform_batch, compute_recipe_batch, compute_reference_batch,
    FREEZE_THRESHOLD, SERVING_SIZE_ML, SLUSHY_THRESHOLD, STANDARD_BOTTLE_ML,
};
pub use models::{AddedIngredient, BatchResult, FreezeStatus, Ingredient, Volume};
pub use suggest::suggest_abv;
pub use units::{VolumeUnit, ML_PER_OZ};
