//! ABV suggestions for free-text ingredient names
//!
//! Best-effort only; callers must let users override the result. Matching is
//! a first-hit substring scan in table order, so "ginger syrup" resolves to
//! gin. That order dependence is kept deliberately stable.

use crate::data::ABV_SUGGESTIONS;

/// Guess a default ABV for an ingredient name
pub fn suggest_abv(name: &str) -> Option<f64> {
    let normalized = name.trim().to_lowercase();
    // Blank input is a miss; every key contains "" and would otherwise match
    // the first row.
    if normalized.is_empty() {
        return None;
    }

    if let Some((_, abv)) = ABV_SUGGESTIONS.iter().find(|(key, _)| *key == normalized) {
        return Some(*abv);
    }

    ABV_SUGGESTIONS
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map(|(key, abv)| {
            tracing::debug!("ABV suggestion for '{}' matched '{}'", normalized, key);
            *abv
        })
}
