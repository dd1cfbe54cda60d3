//! Batch result model
//!
//! The single output shape shared by the freeform and reference engines.

use serde::{Deserialize, Serialize};

use crate::units::{milliliters_to_ounces, ounces_to_milliliters};

/// A volume expressed in both milliliters and ounces
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub ml: f64,
    pub oz: f64,
}

impl Volume {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from milliliters; ounces are derived for display
    pub fn from_ml(ml: f64) -> Self {
        Self {
            ml,
            oz: milliliters_to_ounces(ml),
        }
    }

    /// Build from ounces; milliliters are rounded to a whole number
    pub fn from_oz(oz: f64) -> Self {
        Self {
            ml: ounces_to_milliliters(oz),
            oz,
        }
    }
}

/// Whether the finished batch stays liquid in a home freezer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreezeStatus {
    /// Below 15% ABV
    Freeze,
    /// 15% up to 22% ABV
    Slushy,
    /// 22% ABV and above
    Safe,
}

impl FreezeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreezeStatus::Freeze => "freeze",
            FreezeStatus::Slushy => "slushy",
            FreezeStatus::Safe => "safe",
        }
    }

    /// Human readable message for a batch at `abv` percent
    pub fn message(&self, abv: f64) -> String {
        match self {
            FreezeStatus::Freeze => {
                format!("At {:.1}% ABV this batch will freeze solid", abv)
            }
            FreezeStatus::Slushy => format!(
                "At {:.1}% ABV this batch will be thick and slushy, but drinkable",
                abv
            ),
            FreezeStatus::Safe => {
                format!("At {:.1}% ABV this batch stays pourable", abv)
            }
        }
    }
}

/// An ingredient to pour into the bottle after the pour-off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedIngredient {
    pub name: String,
    pub ml: f64,
    pub oz: f64,
    pub abv: f64,
}

/// Full instructions for converting one bottle into a freezer batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub pour_off: Volume,
    pub ingredients_to_add: Vec<AddedIngredient>,
    pub water_to_add: Volume,
    /// Final ABV, percent, one decimal
    pub final_abv: f64,
    pub total_volume: Volume,
    pub servings: u32,
    pub freeze_status: FreezeStatus,
    pub freeze_message: String,
    pub base_spirit_name: String,
    pub base_spirit_remaining: Volume,
}

impl BatchResult {
    /// Neutral result for incomplete input
    pub fn empty() -> Self {
        Self {
            pour_off: Volume::zero(),
            ingredients_to_add: Vec::new(),
            water_to_add: Volume::zero(),
            final_abv: 0.0,
            total_volume: Volume::zero(),
            servings: 0,
            freeze_status: FreezeStatus::Freeze,
            freeze_message: "Add ingredients to calculate".to_string(),
            base_spirit_name: String::new(),
            base_spirit_remaining: Volume::zero(),
        }
    }

    /// True when this is the neutral result for incomplete input
    pub fn is_empty(&self) -> bool {
        self.base_spirit_name.is_empty() && self.total_volume.ml == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_conversions() {
        let v = Volume::from_ml(450.0);
        assert_eq!(v.oz, 15.22);

        let v = Volume::from_oz(5.0);
        assert_eq!(v.ml, 148.0);
        assert_eq!(v.oz, 5.0);
    }

    #[test]
    fn test_empty_result() {
        let result = BatchResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.final_abv, 0.0);
        assert_eq!(result.freeze_status, FreezeStatus::Freeze);
        assert_eq!(result.freeze_message, "Add ingredients to calculate");
        assert!(result.base_spirit_name.is_empty());
    }

    #[test]
    fn test_freeze_status_message() {
        assert_eq!(
            FreezeStatus::Safe.message(28.3),
            "At 28.3% ABV this batch stays pourable"
        );
        assert!(FreezeStatus::Freeze.message(12.0).contains("freeze solid"));
        assert!(FreezeStatus::Slushy.message(18.0).contains("18.0%"));
    }

    #[test]
    fn test_freeze_status_serializes_lowercase() {
        let json = serde_json::to_string(&FreezeStatus::Slushy).unwrap();
        assert_eq!(json, "\"slushy\"");
    }
}
