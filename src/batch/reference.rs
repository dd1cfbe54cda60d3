//! Reference batch engine
//!
//! Rescales a verified 750 ml batch to another bottle size. Every ounce
//! figure is rounded to the nearest quarter so it can be measured with a
//! jigger; at 750 ml the table reproduces exactly.

use super::{classify_freeze, servings_for, STANDARD_BOTTLE_ML};
use crate::data::reference_batch;
use crate::models::{AddedIngredient, BatchResult, Volume};
use crate::units::{round_to, round_to_quarter, ML_PER_OZ};

/// Rescale the reference batch `recipe_id` to `bottle_volume_ml`.
///
/// Returns `None` when the id is not in the reference table.
pub fn compute_reference_batch(recipe_id: &str, bottle_volume_ml: f64) -> Option<BatchResult> {
    let reference = reference_batch(recipe_id)?;
    if bottle_volume_ml <= 0.0 {
        return Some(BatchResult::empty());
    }

    let scale_factor = bottle_volume_ml / STANDARD_BOTTLE_ML;

    let pour_off_oz = round_to_quarter(reference.pour_off_oz * scale_factor);
    let bottle_oz = round_to_quarter(bottle_volume_ml / ML_PER_OZ);
    let base = Volume::from_oz(bottle_oz - pour_off_oz);

    let ingredients_to_add: Vec<AddedIngredient> = reference
        .add_back
        .iter()
        .map(|item| {
            let volume = Volume::from_oz(round_to_quarter(item.oz * scale_factor));
            AddedIngredient {
                name: item.name.to_string(),
                ml: volume.ml,
                oz: volume.oz,
                abv: item.abv,
            }
        })
        .collect();

    let water = Volume::from_oz(round_to_quarter(reference.water_oz * scale_factor));

    let alcohol_ml = base.ml * reference.base_spirit_abv / 100.0
        + ingredients_to_add
            .iter()
            .map(|item| item.ml * item.abv / 100.0)
            .sum::<f64>();
    let final_abv = round_to(alcohol_ml / bottle_volume_ml * 100.0, 1);
    let freeze_status = classify_freeze(final_abv);

    tracing::debug!(
        "Reference batch '{}' at {} ml: scale {:.3}, pour off {} oz, final ABV {}%",
        reference.id,
        bottle_volume_ml,
        scale_factor,
        pour_off_oz,
        final_abv
    );

    Some(BatchResult {
        pour_off: Volume::from_oz(pour_off_oz),
        ingredients_to_add,
        water_to_add: water,
        final_abv,
        total_volume: Volume::from_ml(bottle_volume_ml),
        servings: servings_for(bottle_volume_ml),
        freeze_status,
        freeze_message: freeze_status.message(final_abv),
        base_spirit_name: reference.base_spirit.to_string(),
        base_spirit_remaining: base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::REFERENCE_BATCHES;
    use crate::models::FreezeStatus;

    fn oz_of(result: &BatchResult, name: &str) -> f64 {
        result
            .ingredients_to_add
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.oz)
            .unwrap_or_else(|| panic!("missing {}", name))
    }

    #[test]
    fn test_margarita_750() {
        let result = compute_reference_batch("margarita", 750.0).unwrap();
        assert_eq!(result.pour_off.oz, 10.0);
        assert_eq!(oz_of(&result, "Lime juice"), 5.0);
        assert_eq!(oz_of(&result, "Orange liqueur"), 4.0);
        assert_eq!(oz_of(&result, "Agave syrup"), 1.5);
        assert_eq!(result.water_to_add.oz, 0.0);
        assert!(result.final_abv >= 28.0 && result.final_abv <= 30.5, "{}", result.final_abv);
        assert_eq!(result.freeze_status, FreezeStatus::Safe);
        assert_eq!(result.base_spirit_name, "Blanco tequila");
        assert_eq!(result.base_spirit_remaining.oz, 15.25);
        assert_eq!(result.base_spirit_remaining.ml, 451.0);
        assert_eq!(result.servings, 8);
    }

    #[test]
    fn test_margarita_375() {
        let result = compute_reference_batch("margarita", 375.0).unwrap();
        assert_eq!(result.pour_off.oz, 5.0);
        assert_eq!(oz_of(&result, "Lime juice"), 2.5);
        assert_eq!(oz_of(&result, "Orange liqueur"), 2.0);
        assert_eq!(oz_of(&result, "Agave syrup"), 0.75);
        assert_eq!(result.water_to_add.oz, 0.0);
        assert_eq!(result.servings, 4);
    }

    #[test]
    fn test_negroni_750() {
        let result = compute_reference_batch("negroni", 750.0).unwrap();
        assert_eq!(result.pour_off.oz, 16.0);
        assert_eq!(oz_of(&result, "Sweet vermouth"), 7.0);
        assert_eq!(oz_of(&result, "Campari"), 7.0);
        assert_eq!(result.water_to_add.oz, 0.0);
        assert!(result.final_abv >= 22.0 && result.final_abv <= 30.0, "{}", result.final_abv);
    }

    #[test]
    fn test_reproduces_table_at_750() {
        for reference in REFERENCE_BATCHES {
            let result = compute_reference_batch(reference.id, 750.0).unwrap();
            assert_eq!(result.pour_off.oz, reference.pour_off_oz, "{}", reference.id);
            assert_eq!(result.water_to_add.oz, reference.water_oz, "{}", reference.id);
            for (added, expected) in result.ingredients_to_add.iter().zip(reference.add_back) {
                assert_eq!(added.name, expected.name);
                assert_eq!(added.oz, expected.oz, "{} {}", reference.id, expected.name);
            }
        }
    }

    #[test]
    fn test_linear_scaling_law() {
        for bottle in [200.0, 375.0, 1000.0, 1750.0] {
            let factor = bottle / 750.0;
            for reference in REFERENCE_BATCHES {
                let result = compute_reference_batch(reference.id, bottle).unwrap();
                assert_eq!(
                    result.pour_off.oz,
                    round_to_quarter(reference.pour_off_oz * factor)
                );
                for (added, expected) in result.ingredients_to_add.iter().zip(reference.add_back) {
                    assert_eq!(added.oz, round_to_quarter(expected.oz * factor));
                }
            }
        }
    }

    #[test]
    fn test_abv_roughly_scale_invariant() {
        // Bottle and pour-off round to quarters separately: martini moves 37.6 -> 38.5 at 375 ml.
        for reference in REFERENCE_BATCHES {
            let standard = compute_reference_batch(reference.id, 750.0).unwrap().final_abv;
            for bottle in [375.0, 1000.0, 1500.0, 1750.0] {
                let scaled = compute_reference_batch(reference.id, bottle).unwrap().final_abv;
                assert!(
                    (scaled - standard).abs() <= 1.0,
                    "{} at {} ml: {} vs {}",
                    reference.id,
                    bottle,
                    scaled,
                    standard
                );
            }
        }
    }

    #[test]
    fn test_every_reference_batch_stays_pourable() {
        for reference in REFERENCE_BATCHES {
            let result = compute_reference_batch(reference.id, 750.0).unwrap();
            assert_eq!(result.freeze_status, FreezeStatus::Safe, "{}", reference.id);
        }
    }

    #[test]
    fn test_unknown_recipe() {
        assert!(compute_reference_batch("mojito", 750.0).is_none());
    }
}
