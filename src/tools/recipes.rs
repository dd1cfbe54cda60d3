//! Recipe MCP Tools
//!
//! Tools for browsing the recipe catalogue and suggesting ingredient ABVs.

use serde::Serialize;

use crate::data::{
    recommended_dilution, reference_batch, single_serving_recipe, RecipeIngredient,
    ReferenceBatch, DEFAULT_DILUTION_PERCENT, REFERENCE_BATCHES,
};
use crate::suggest::suggest_abv;

/// Recipe summary for listing
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub base_spirit: &'static str,
    pub base_spirit_abv: f64,
    pub recommended_dilution_percent: f64,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub total: usize,
}

/// Full recipe detail: single serving, 750 ml reference batch, dilution
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub single_serving: &'static [RecipeIngredient],
    pub reference_batch: &'static ReferenceBatch,
    pub recommended_dilution_percent: f64,
}

/// Response for suggest_abv
#[derive(Debug, Serialize)]
pub struct SuggestAbvResponse {
    pub name: String,
    pub suggested_abv: Option<f64>,
}

fn dilution_for(id: &str) -> f64 {
    recommended_dilution(id).unwrap_or(DEFAULT_DILUTION_PERCENT)
}

/// List every catalogue recipe in table order
pub fn list_recipes() -> ListRecipesResponse {
    let recipes: Vec<RecipeSummary> = REFERENCE_BATCHES
        .iter()
        .map(|batch| RecipeSummary {
            id: batch.id,
            name: batch.name,
            base_spirit: batch.base_spirit,
            base_spirit_abv: batch.base_spirit_abv,
            recommended_dilution_percent: dilution_for(batch.id),
        })
        .collect();
    let total = recipes.len();

    ListRecipesResponse { recipes, total }
}

/// Get full details for one recipe
pub fn get_recipe(id: &str) -> Option<RecipeDetail> {
    let id = id.trim();
    let reference = reference_batch(id)?;
    let recipe = single_serving_recipe(id)?;

    Some(RecipeDetail {
        id: reference.id,
        name: reference.name,
        single_serving: recipe.ingredients,
        reference_batch: reference,
        recommended_dilution_percent: dilution_for(id),
    })
}

/// Suggest a default ABV for an ingredient name
pub fn suggest_ingredient_abv(name: &str) -> SuggestAbvResponse {
    SuggestAbvResponse {
        name: name.to_string(),
        suggested_abv: suggest_abv(name),
    }
}
