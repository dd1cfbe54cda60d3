//! Recommended dilution per catalogue recipe
//!
//! Stirred, spirit-forward drinks take less water than shaken sours.

/// Dilution used when a recipe has no recommendation
pub const DEFAULT_DILUTION_PERCENT: f64 = 20.0;

pub const RECOMMENDED_DILUTION: &[(&str, f64)] = &[
    ("margarita", 20.0),
    ("negroni", 15.0),
    ("manhattan", 20.0),
    ("old-fashioned", 15.0),
    ("martini", 22.0),
    ("boulevardier", 15.0),
    ("daiquiri", 20.0),
    ("gimlet", 20.0),
    ("cosmopolitan", 20.0),
    ("espresso-martini", 15.0),
    ("whiskey-sour", 20.0),
    ("sidecar", 20.0),
    ("last-word", 18.0),
];

/// Recommended dilution percent for a recipe id
pub fn recommended_dilution(id: &str) -> Option<f64> {
    RECOMMENDED_DILUTION
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, percent)| *percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference::REFERENCE_BATCHES;

    #[test]
    fn test_every_reference_recipe_has_a_recommendation() {
        for batch in REFERENCE_BATCHES {
            assert!(recommended_dilution(batch.id).is_some(), "{}", batch.id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(recommended_dilution("negroni"), Some(15.0));
        assert_eq!(recommended_dilution("mojito"), None);
    }
}
