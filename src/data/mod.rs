//! Recipe catalogue
//!
//! Closed, hand-curated tables keyed by recipe id.

pub mod abv;
pub mod dilution;
pub mod reference;
pub mod single_serving;

pub use abv::ABV_SUGGESTIONS;
pub use dilution::{recommended_dilution, DEFAULT_DILUTION_PERCENT, RECOMMENDED_DILUTION};
pub use reference::{reference_batch, AddBack, ReferenceBatch, REFERENCE_BATCHES};
pub use single_serving::{
    single_serving_recipe, RecipeIngredient, SingleServingRecipe, SINGLE_SERVING_RECIPES,
};

/// Catalogue recipe ids in table order
pub fn recipe_ids() -> impl Iterator<Item = &'static str> {
    REFERENCE_BATCHES.iter().map(|batch| batch.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_ids_in_table_order() {
        let ids: Vec<_> = recipe_ids().collect();
        assert_eq!(ids.len(), 13);
        assert_eq!(ids.first(), Some(&"margarita"));
        assert_eq!(ids.last(), Some(&"last-word"));
        for id in ids {
            assert!(single_serving_recipe(id).is_some(), "{}", id);
        }
    }
}
