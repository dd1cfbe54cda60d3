//! Volume unit types and conversion constants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per fluid ounce
pub const ML_PER_OZ: f64 = 29.5735;
/// Milliliters per centiliter
pub const ML_PER_CL: f64 = 10.0;
/// Milliliters per dash of bitters
pub const ML_PER_DASH: f64 = 0.9;
/// Milliliters per bar spoon
pub const ML_PER_BARSPOON: f64 = 5.0;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 5.0;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;

/// Error returned by strict unit parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown volume unit: '{0}'")]
    Unknown(String),
}

/// A bar measurement unit with a fixed factor to milliliters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Ml,
    Oz,
    Cl,
    Dash,
    Barspoon,
    Tsp,
    Tbsp,
}

impl VolumeUnit {
    /// Every unit, in display order
    pub const ALL: [VolumeUnit; 7] = [
        VolumeUnit::Ml,
        VolumeUnit::Oz,
        VolumeUnit::Cl,
        VolumeUnit::Dash,
        VolumeUnit::Barspoon,
        VolumeUnit::Tsp,
        VolumeUnit::Tbsp,
    ];

    /// Multiplier that converts one of this unit into milliliters
    pub fn ml_factor(&self) -> f64 {
        match self {
            VolumeUnit::Ml => 1.0,
            VolumeUnit::Oz => ML_PER_OZ,
            VolumeUnit::Cl => ML_PER_CL,
            VolumeUnit::Dash => ML_PER_DASH,
            VolumeUnit::Barspoon => ML_PER_BARSPOON,
            VolumeUnit::Tsp => ML_PER_TSP,
            VolumeUnit::Tbsp => ML_PER_TBSP,
        }
    }

    /// Canonical short label
    pub fn label(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::Oz => "oz",
            VolumeUnit::Cl => "cl",
            VolumeUnit::Dash => "dash",
            VolumeUnit::Barspoon => "barspoon",
            VolumeUnit::Tsp => "tsp",
            VolumeUnit::Tbsp => "tbsp",
        }
    }

    /// Parse a free-text label, treating anything unrecognized as milliliters.
    ///
    /// Free-text entry resolves to a factor of 1 instead of failing. The
    /// fallback is logged so a misspelled unit is at least visible.
    pub fn parse_lenient(label: &str) -> Self {
        match label.parse() {
            Ok(unit) => unit,
            Err(UnitError::Unknown(raw)) => {
                tracing::warn!(
                    "Unit conversion fallback: '{}' is not a known volume unit, treating as ml",
                    raw
                );
                VolumeUnit::Ml
            }
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Ok(VolumeUnit::Ml),
            "oz" | "ounce" | "ounces" | "fl oz" | "floz" => Ok(VolumeUnit::Oz),
            "cl" | "centiliter" | "centiliters" | "centilitre" | "centilitres" => Ok(VolumeUnit::Cl),
            "dash" | "dashes" => Ok(VolumeUnit::Dash),
            "barspoon" | "barspoons" | "bar spoon" | "bar spoons" => Ok(VolumeUnit::Barspoon),
            "tsp" | "teaspoon" | "teaspoons" => Ok(VolumeUnit::Tsp),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(VolumeUnit::Tbsp),
            _ => Err(UnitError::Unknown(s.trim().to_string())),
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
