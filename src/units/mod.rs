//! Volume units and conversion
//!
//! Milliliters are the canonical computation unit; ounces are the display unit.

pub mod converter;
pub mod volume;

pub use converter::{
    milliliters_to_ounces, ounces_to_milliliters, round_to, round_to_quarter, to_milliliters,
};
pub use volume::{UnitError, VolumeUnit, ML_PER_OZ};
