//! Catalogue recipes through the freeform engine

use super::compute_freeform_batch;
use crate::data::{recommended_dilution, single_serving_recipe, DEFAULT_DILUTION_PERCENT};
use crate::models::BatchResult;

/// Batch a catalogue recipe with the freeform engine.
///
/// Without an explicit dilution the recipe's recommended dilution is used.
/// Returns `None` for an unknown recipe id.
pub fn compute_recipe_batch(
    recipe_id: &str,
    bottle_volume_ml: f64,
    dilution_percent: Option<f64>,
) -> Option<BatchResult> {
    let recipe = single_serving_recipe(recipe_id)?;
    let dilution = dilution_percent
        .or_else(|| recommended_dilution(recipe_id))
        .unwrap_or(DEFAULT_DILUTION_PERCENT);

    Some(compute_freeform_batch(
        &recipe.to_ingredients(),
        bottle_volume_ml,
        dilution,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_recommended_dilution() {
        let result = compute_recipe_batch("negroni", 750.0, None).unwrap();
        // 15% of 750 ml
        assert_eq!(result.water_to_add.ml, 113.0);
        assert_eq!(result.base_spirit_name, "London dry gin");
    }

    #[test]
    fn test_explicit_dilution_overrides() {
        let result = compute_recipe_batch("negroni", 750.0, Some(0.0)).unwrap();
        assert_eq!(result.water_to_add.ml, 0.0);
        assert_eq!(result.base_spirit_remaining.ml, 250.0);
        assert_eq!(result.pour_off.ml, 500.0);
    }

    #[test]
    fn test_unknown_recipe() {
        assert!(compute_recipe_batch("mojito", 750.0, None).is_none());
    }
}
