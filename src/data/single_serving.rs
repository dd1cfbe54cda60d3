//! Single-serving recipes for the freeform engine

use serde::Serialize;

use crate::models::Ingredient;
use crate::units::VolumeUnit::{self, Barspoon, Dash, Oz};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub name: &'static str,
    pub amount: f64,
    pub unit: VolumeUnit,
    pub abv: f64,
    pub is_base_spirit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SingleServingRecipe {
    pub id: &'static str,
    pub name: &'static str,
    pub ingredients: &'static [RecipeIngredient],
}

impl SingleServingRecipe {
    /// Owned ingredients ready for `compute_freeform_batch`
    pub fn to_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients
            .iter()
            .map(|i| Ingredient {
                name: i.name.to_string(),
                amount: i.amount,
                unit: i.unit,
                abv: i.abv,
                is_base_spirit: i.is_base_spirit,
            })
            .collect()
    }
}

const fn base(name: &'static str, amount: f64, unit: VolumeUnit, abv: f64) -> RecipeIngredient {
    RecipeIngredient {
        name,
        amount,
        unit,
        abv,
        is_base_spirit: true,
    }
}

const fn mix(name: &'static str, amount: f64, unit: VolumeUnit, abv: f64) -> RecipeIngredient {
    RecipeIngredient {
        name,
        amount,
        unit,
        abv,
        is_base_spirit: false,
    }
}

pub const SINGLE_SERVING_RECIPES: &[SingleServingRecipe] = &[
    SingleServingRecipe {
        id: "margarita",
        name: "Margarita",
        ingredients: &[
            base("Blanco tequila", 2.0, Oz, 40.0),
            mix("Lime juice", 1.0, Oz, 0.0),
            mix("Orange liqueur", 0.75, Oz, 40.0),
            mix("Agave syrup", 0.25, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "negroni",
        name: "Negroni",
        ingredients: &[
            base("London dry gin", 1.0, Oz, 40.0),
            mix("Sweet vermouth", 1.0, Oz, 16.5),
            mix("Campari", 1.0, Oz, 24.0),
        ],
    },
    SingleServingRecipe {
        id: "manhattan",
        name: "Manhattan",
        ingredients: &[
            base("Rye whiskey", 2.0, Oz, 45.0),
            mix("Sweet vermouth", 1.0, Oz, 16.5),
            mix("Angostura bitters", 2.0, Dash, 44.7),
        ],
    },
    SingleServingRecipe {
        id: "old-fashioned",
        name: "Old Fashioned",
        ingredients: &[
            base("Bourbon", 2.0, Oz, 45.0),
            mix("Demerara syrup", 1.0, Barspoon, 0.0),
            mix("Angostura bitters", 2.0, Dash, 44.7),
            mix("Orange bitters", 1.0, Dash, 45.0),
        ],
    },
    SingleServingRecipe {
        id: "martini",
        name: "Martini",
        ingredients: &[
            base("London dry gin", 2.5, Oz, 47.0),
            mix("Dry vermouth", 0.5, Oz, 17.0),
            mix("Orange bitters", 1.0, Dash, 45.0),
        ],
    },
    SingleServingRecipe {
        id: "boulevardier",
        name: "Boulevardier",
        ingredients: &[
            base("Bourbon", 1.25, Oz, 45.0),
            mix("Sweet vermouth", 1.0, Oz, 16.5),
            mix("Campari", 1.0, Oz, 24.0),
        ],
    },
    SingleServingRecipe {
        id: "daiquiri",
        name: "Daiquiri",
        ingredients: &[
            base("White rum", 2.0, Oz, 40.0),
            mix("Lime juice", 1.0, Oz, 0.0),
            mix("Simple syrup", 0.75, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "gimlet",
        name: "Gimlet",
        ingredients: &[
            base("London dry gin", 2.0, Oz, 40.0),
            mix("Lime juice", 0.75, Oz, 0.0),
            mix("Simple syrup", 0.5, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "cosmopolitan",
        name: "Cosmopolitan",
        ingredients: &[
            base("Citrus vodka", 1.5, Oz, 40.0),
            mix("Orange liqueur", 0.75, Oz, 40.0),
            mix("Cranberry juice", 1.0, Oz, 0.0),
            mix("Lime juice", 0.5, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "espresso-martini",
        name: "Espresso Martini",
        ingredients: &[
            base("Vodka", 1.5, Oz, 40.0),
            mix("Coffee liqueur", 0.75, Oz, 20.0),
            mix("Cold brew concentrate", 1.0, Oz, 0.0),
            mix("Simple syrup", 0.25, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "whiskey-sour",
        name: "Whiskey Sour",
        ingredients: &[
            base("Bourbon", 2.0, Oz, 45.0),
            mix("Lemon juice", 0.75, Oz, 0.0),
            mix("Simple syrup", 0.75, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "sidecar",
        name: "Sidecar",
        ingredients: &[
            base("Cognac", 2.0, Oz, 40.0),
            mix("Orange liqueur", 0.75, Oz, 40.0),
            mix("Lemon juice", 0.75, Oz, 0.0),
        ],
    },
    SingleServingRecipe {
        id: "last-word",
        name: "Last Word",
        ingredients: &[
            base("London dry gin", 0.75, Oz, 40.0),
            mix("Green Chartreuse", 0.75, Oz, 55.0),
            mix("Maraschino liqueur", 0.75, Oz, 32.0),
            mix("Lime juice", 0.75, Oz, 0.0),
        ],
    },
];

/// Look up a single-serving recipe by id
pub fn single_serving_recipe(id: &str) -> Option<&'static SingleServingRecipe> {
    SINGLE_SERVING_RECIPES.iter().find(|recipe| recipe.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference::REFERENCE_BATCHES;

    #[test]
    fn test_mirrors_reference_ids() {
        assert_eq!(SINGLE_SERVING_RECIPES.len(), REFERENCE_BATCHES.len());
        for (recipe, batch) in SINGLE_SERVING_RECIPES.iter().zip(REFERENCE_BATCHES) {
            assert_eq!(recipe.id, batch.id);
            assert_eq!(recipe.name, batch.name);
        }
    }

    #[test]
    fn test_exactly_one_base_spirit_each() {
        for recipe in SINGLE_SERVING_RECIPES {
            let flagged = recipe.ingredients.iter().filter(|i| i.is_base_spirit).count();
            assert_eq!(flagged, 1, "{}", recipe.id);
        }
    }

    #[test]
    fn test_to_ingredients() {
        let negroni = single_serving_recipe("negroni").unwrap().to_ingredients();
        assert_eq!(negroni.len(), 3);
        assert_eq!(negroni[0].name, "London dry gin");
        assert!(negroni[0].is_base_spirit);
        assert_eq!(negroni[2].abv, 24.0);
    }
}
