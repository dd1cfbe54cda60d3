//! Freezer Batch Tools module
//!
//! Tool implementations behind the MCP server. Input validation happens here;
//! the engines themselves never fail.

pub mod batches;
pub mod recipes;
pub mod status;

use thiserror::Error;

/// Rejected tool input
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("Ingredient '{name}': amount must be a finite number >= 0, got {amount}")]
    InvalidAmount { name: String, amount: f64 },

    #[error("Ingredient '{name}': abv must be between 0 and 100, got {abv}")]
    InvalidAbv { name: String, abv: f64 },

    #[error("bottle_ml must be a finite number greater than 0, got {0}")]
    InvalidBottle(f64),

    #[error("dilution_percent must be at least 0 and below 100, got {0}")]
    InvalidDilution(f64),

    #[error("amount must be a finite number >= 0, got {0}")]
    InvalidVolume(f64),
}

pub type ToolResult<T> = Result<T, ToolError>;

pub(crate) fn validate_bottle(bottle_ml: f64) -> ToolResult<f64> {
    if bottle_ml.is_finite() && bottle_ml > 0.0 {
        Ok(bottle_ml)
    } else {
        Err(ToolError::InvalidBottle(bottle_ml))
    }
}

pub(crate) fn validate_dilution(dilution_percent: f64) -> ToolResult<f64> {
    if (0.0..100.0).contains(&dilution_percent) {
        Ok(dilution_percent)
    } else {
        Err(ToolError::InvalidDilution(dilution_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bottle() {
        assert_eq!(validate_bottle(750.0), Ok(750.0));
        assert_eq!(validate_bottle(0.0), Err(ToolError::InvalidBottle(0.0)));
        assert!(validate_bottle(f64::INFINITY).is_err());
        assert!(validate_bottle(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_dilution() {
        assert_eq!(validate_dilution(0.0), Ok(0.0));
        assert_eq!(validate_dilution(20.0), Ok(20.0));
        assert!(validate_dilution(100.0).is_err());
        assert!(validate_dilution(-1.0).is_err());
    }
}
