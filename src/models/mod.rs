//! Data models
//!
//! Inputs to and outputs from the batch engines.

mod batch_result;
mod ingredient;

pub use batch_result::{AddedIngredient, BatchResult, FreezeStatus, Volume};
pub use ingredient::Ingredient;
