//! Server configuration
//!
//! Defaults applied when a tool call omits bottle size or dilution.

use serde::Serialize;
use thiserror::Error;

use crate::batch::STANDARD_BOTTLE_ML;
use crate::data::DEFAULT_DILUTION_PERCENT;

pub const BOTTLE_ML_VAR: &str = "FREEZER_BATCH_BOTTLE_ML";
pub const DILUTION_PERCENT_VAR: &str = "FREEZER_BATCH_DILUTION_PERCENT";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a number: '{value}'")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be greater than 0, got {value}")]
    NonPositiveBottle { var: &'static str, value: f64 },

    #[error("{var} must be between 0 and 100 (exclusive), got {value}")]
    DilutionOutOfRange { var: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServerConfig {
    pub default_bottle_ml: f64,
    pub default_dilution_percent: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_bottle_ml: STANDARD_BOTTLE_ML,
            default_dilution_percent: DEFAULT_DILUTION_PERCENT,
        }
    }
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_bottle_ml = match lookup(BOTTLE_ML_VAR) {
            Some(raw) => parse_number(BOTTLE_ML_VAR, &raw)?,
            None => defaults.default_bottle_ml,
        };
        if default_bottle_ml <= 0.0 {
            return Err(ConfigError::NonPositiveBottle {
                var: BOTTLE_ML_VAR,
                value: default_bottle_ml,
            });
        }

        let default_dilution_percent = match lookup(DILUTION_PERCENT_VAR) {
            Some(raw) => parse_number(DILUTION_PERCENT_VAR, &raw)?,
            None => defaults.default_dilution_percent,
        };
        if !(0.0..100.0).contains(&default_dilution_percent) {
            return Err(ConfigError::DilutionOutOfRange {
                var: DILUTION_PERCENT_VAR,
                value: default_dilution_percent,
            });
        }

        Ok(Self {
            default_bottle_ml,
            default_dilution_percent,
        })
    }
}

fn parse_number(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::NotANumber {
            var,
            value: raw.to_string(),
        })
}
