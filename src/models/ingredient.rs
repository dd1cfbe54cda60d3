//! Ingredient model
//!
//! One component of a single-serving recipe.

use serde::{Deserialize, Serialize};

use crate::units::{to_milliliters, VolumeUnit};

/// A single-serving recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: VolumeUnit,
    /// Alcohol by volume, percent (0-100)
    #[serde(default)]
    pub abv: f64,
    #[serde(default)]
    pub is_base_spirit: bool,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: VolumeUnit, abv: f64) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
            abv,
            is_base_spirit: false,
        }
    }

    /// Mark this ingredient as the bottle's base spirit
    pub fn base_spirit(mut self) -> Self {
        self.is_base_spirit = true;
        self
    }

    /// Amount converted to milliliters
    pub fn volume_ml(&self) -> f64 {
        to_milliliters(self.amount, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_ml() {
        let bitters = Ingredient::new("Angostura bitters", 2.0, VolumeUnit::Dash, 44.7);
        assert!((bitters.volume_ml() - 1.8).abs() < 1e-9);
        assert!(!bitters.is_base_spirit);
    }

    #[test]
    fn test_deserialize_defaults() {
        let ing: Ingredient =
            serde_json::from_str(r#"{"name": "lime juice", "amount": 30}"#).unwrap();
        assert_eq!(ing.unit, VolumeUnit::Ml);
        assert_eq!(ing.abv, 0.0);
        assert!(!ing.is_base_spirit);
    }
}
