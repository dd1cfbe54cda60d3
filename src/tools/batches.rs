//! Batch MCP Tools
//!
//! Tools for batch calculation and unit conversion.

use serde::Serialize;

use super::{validate_bottle, validate_dilution, ToolError, ToolResult};
use crate::batch::{compute_freeform_batch, compute_recipe_batch, compute_reference_batch};
use crate::config::ServerConfig;
use crate::models::{BatchResult, Ingredient};
use crate::units::{milliliters_to_ounces, round_to, to_milliliters, VolumeUnit};

/// Response for convert_volume
#[derive(Debug, Serialize)]
pub struct ConvertVolumeResponse {
    pub amount: f64,
    pub unit: VolumeUnit,
    /// False when the label was not recognized and ml was assumed
    pub recognized_unit: bool,
    pub ml: f64,
    pub oz: f64,
}

fn validate_ingredient(ingredient: &Ingredient) -> ToolResult<()> {
    if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
        return Err(ToolError::InvalidAmount {
            name: ingredient.name.clone(),
            amount: ingredient.amount,
        });
    }
    if !(0.0..=100.0).contains(&ingredient.abv) {
        return Err(ToolError::InvalidAbv {
            name: ingredient.name.clone(),
            abv: ingredient.abv,
        });
    }
    Ok(())
}

/// Batch an arbitrary ingredient list
pub fn calculate_freeform_batch(
    config: &ServerConfig,
    ingredients: &[Ingredient],
    bottle_ml: Option<f64>,
    dilution_percent: Option<f64>,
) -> ToolResult<BatchResult> {
    for ingredient in ingredients {
        validate_ingredient(ingredient)?;
    }
    let bottle_ml = validate_bottle(bottle_ml.unwrap_or(config.default_bottle_ml))?;
    let dilution = validate_dilution(dilution_percent.unwrap_or(config.default_dilution_percent))?;

    Ok(compute_freeform_batch(ingredients, bottle_ml, dilution))
}

/// Rescale a reference batch. `Ok(None)` for an unknown recipe id.
pub fn calculate_reference_batch(
    config: &ServerConfig,
    recipe_id: &str,
    bottle_ml: Option<f64>,
) -> ToolResult<Option<BatchResult>> {
    let bottle_ml = validate_bottle(bottle_ml.unwrap_or(config.default_bottle_ml))?;
    Ok(compute_reference_batch(recipe_id.trim(), bottle_ml))
}

/// Batch a catalogue recipe with the freeform engine. `Ok(None)` for an unknown recipe id.
pub fn calculate_recipe_batch(
    config: &ServerConfig,
    recipe_id: &str,
    bottle_ml: Option<f64>,
    dilution_percent: Option<f64>,
) -> ToolResult<Option<BatchResult>> {
    let bottle_ml = validate_bottle(bottle_ml.unwrap_or(config.default_bottle_ml))?;
    let dilution = dilution_percent.map(validate_dilution).transpose()?;
    Ok(compute_recipe_batch(recipe_id.trim(), bottle_ml, dilution))
}

/// Convert an amount in a free-text unit to ml and oz
pub fn convert_volume(amount: f64, unit_label: &str) -> ToolResult<ConvertVolumeResponse> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ToolError::InvalidVolume(amount));
    }
    let recognized_unit = unit_label.parse::<VolumeUnit>().is_ok();
    let unit = VolumeUnit::parse_lenient(unit_label);
    let ml = to_milliliters(amount, unit);

    Ok(ConvertVolumeResponse {
        amount,
        unit,
        recognized_unit,
        ml: round_to(ml, 2),
        oz: milliliters_to_ounces(ml),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FreezeStatus;

    fn vodka_and_liqueur() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Vodka", 60.0, VolumeUnit::Ml, 40.0),
            Ingredient::new("Coffee liqueur", 30.0, VolumeUnit::Ml, 20.0),
            Ingredient::new("Espresso", 30.0, VolumeUnit::Ml, 0.0),
        ]
    }

    #[test]
    fn test_freeform_uses_config_defaults() {
        let config = ServerConfig::default();
        let result = calculate_freeform_batch(&config, &vodka_and_liqueur(), None, None).unwrap();
        assert_eq!(result.total_volume.ml, 750.0);
        assert_eq!(result.water_to_add.ml, 150.0);
        assert_eq!(result.final_abv, 20.0);
    }

    #[test]
    fn test_freeform_rejects_bad_input() {
        let config = ServerConfig::default();
        let mut ingredients = vodka_and_liqueur();
        ingredients[0].abv = 140.0;
        assert!(matches!(
            calculate_freeform_batch(&config, &ingredients, None, None),
            Err(ToolError::InvalidAbv { .. })
        ));

        let mut ingredients = vodka_and_liqueur();
        ingredients[2].amount = -1.0;
        assert!(matches!(
            calculate_freeform_batch(&config, &ingredients, None, None),
            Err(ToolError::InvalidAmount { .. })
        ));

        assert!(matches!(
            calculate_freeform_batch(&config, &vodka_and_liqueur(), Some(-5.0), None),
            Err(ToolError::InvalidBottle(_))
        ));
        assert!(matches!(
            calculate_freeform_batch(&config, &vodka_and_liqueur(), None, Some(100.0)),
            Err(ToolError::InvalidDilution(_))
        ));
    }

    #[test]
    fn test_freeform_empty_list_is_not_an_error() {
        let config = ServerConfig::default();
        let result = calculate_freeform_batch(&config, &[], None, None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_reference_batch() {
        let config = ServerConfig::default();
        let result = calculate_reference_batch(&config, " margarita ", Some(375.0))
            .unwrap()
            .unwrap();
        assert_eq!(result.pour_off.oz, 5.0);
        assert_eq!(result.freeze_status, FreezeStatus::Safe);

        assert!(calculate_reference_batch(&config, "mojito", None).unwrap().is_none());
    }

    #[test]
    fn test_recipe_batch() {
        let config = ServerConfig::default();
        let result = calculate_recipe_batch(&config, "daiquiri", None, Some(0.0))
            .unwrap()
            .unwrap();
        assert_eq!(result.water_to_add.ml, 0.0);
        assert_eq!(result.base_spirit_name, "White rum");
        assert!(calculate_recipe_batch(&config, "mojito", None, None).unwrap().is_none());
    }

    #[test]
    fn test_convert_volume() {
        let response = convert_volume(2.0, "oz").unwrap();
        assert!(response.recognized_unit);
        assert_eq!(response.ml, 59.15);
        assert_eq!(response.oz, 2.0);

        let response = convert_volume(3.0, "dashes").unwrap();
        assert_eq!(response.unit, VolumeUnit::Dash);
        assert_eq!(response.ml, 2.7);
    }

    #[test]
    fn test_convert_volume_unknown_unit_assumes_ml() {
        let response = convert_volume(10.0, "splash").unwrap();
        assert!(!response.recognized_unit);
        assert_eq!(response.unit, VolumeUnit::Ml);
        assert_eq!(response.ml, 10.0);
        assert!(convert_volume(-1.0, "ml").is_err());
    }
}
