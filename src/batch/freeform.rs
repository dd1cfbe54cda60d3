//! Freeform batch engine
//!
//! Scales an arbitrary single-serving recipe to fill one bottle. The recipe's
//! ratios are preserved exactly; only the absolute scale changes. Dilution
//! water takes a fixed share of the bottle and carries no alcohol.

use super::{classify_freeze, servings_for};
use crate::models::{AddedIngredient, BatchResult, Ingredient, Volume};
use crate::units::round_to;

/// Index of the base spirit: the flagged ingredient, or else the strongest
/// one with ABV above zero. `None` when nothing in the recipe is alcoholic.
///
/// Never writes the choice back into the caller's ingredients.
fn find_base_spirit(ingredients: &[Ingredient]) -> Option<usize> {
    if !ingredients.iter().any(|i| i.abv > 0.0) {
        return None;
    }

    if let Some(flagged) = ingredients.iter().position(|i| i.is_base_spirit) {
        return Some(flagged);
    }

    let mut best: Option<usize> = None;
    for (index, ingredient) in ingredients.iter().enumerate() {
        if ingredient.abv <= 0.0 {
            continue;
        }
        match best {
            Some(b) if ingredients[b].abv >= ingredient.abv => {}
            _ => best = Some(index),
        }
    }
    best
}

/// Convert a single-serving recipe into a full-bottle freezer batch.
///
/// Incomplete input (no ingredients, zero total volume, nothing alcoholic,
/// a non-positive bottle, or dilution outside `0..100`) yields
/// `BatchResult::empty()`.
pub fn compute_freeform_batch(
    ingredients: &[Ingredient],
    bottle_volume_ml: f64,
    dilution_percent: f64,
) -> BatchResult {
    if ingredients.is_empty()
        || bottle_volume_ml <= 0.0
        || !(0.0..100.0).contains(&dilution_percent)
    {
        return BatchResult::empty();
    }

    let recipe_ml: Vec<f64> = ingredients.iter().map(Ingredient::volume_ml).collect();
    let recipe_total_ml: f64 = recipe_ml.iter().sum();
    if recipe_total_ml <= 0.0 {
        return BatchResult::empty();
    }

    let Some(base_index) = find_base_spirit(ingredients) else {
        tracing::debug!("No ingredient with ABV above zero; returning empty batch");
        return BatchResult::empty();
    };

    let water_ml = (bottle_volume_ml * dilution_percent / 100.0).round();
    let occupiable_ml = bottle_volume_ml - water_ml;
    let scale_factor = occupiable_ml / recipe_total_ml;

    let scaled_ml: Vec<f64> = recipe_ml
        .iter()
        .map(|ml| (ml * scale_factor).round())
        .collect();

    let base = &ingredients[base_index];
    let base_ml = scaled_ml[base_index];
    let pour_off_ml = bottle_volume_ml - base_ml;

    let ingredients_to_add: Vec<AddedIngredient> = ingredients
        .iter()
        .zip(&scaled_ml)
        .enumerate()
        .filter(|(index, _)| *index != base_index)
        .map(|(_, (ingredient, ml))| AddedIngredient {
            name: ingredient.name.clone(),
            ml: *ml,
            oz: Volume::from_ml(*ml).oz,
            abv: ingredient.abv,
        })
        .collect();

    let alcohol_ml: f64 = ingredients
        .iter()
        .zip(&scaled_ml)
        .map(|(ingredient, ml)| ml * ingredient.abv / 100.0)
        .sum();
    let final_abv = round_to(alcohol_ml / bottle_volume_ml * 100.0, 1);
    let freeze_status = classify_freeze(final_abv);

    tracing::debug!(
        "Freeform batch: base '{}', scale {:.3}, pour off {} ml, final ABV {}%",
        base.name,
        scale_factor,
        pour_off_ml,
        final_abv
    );

    BatchResult {
        pour_off: Volume::from_ml(pour_off_ml),
        ingredients_to_add,
        water_to_add: Volume::from_ml(water_ml),
        final_abv,
        total_volume: Volume::from_ml(bottle_volume_ml),
        servings: servings_for(bottle_volume_ml),
        freeze_status,
        freeze_message: freeze_status.message(final_abv),
        base_spirit_name: base.name.clone(),
        base_spirit_remaining: Volume::from_ml(base_ml),
    }
}
