//! Reference freezer batches
//!
//! Pour-off and add-back measurements for a standard 750 ml bottle, all in
//! quarter-ounce increments so they reproduce exactly at scale factor 1.

use serde::Serialize;

/// One ingredient poured back into the bottle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddBack {
    pub name: &'static str,
    pub oz: f64,
    pub abv: f64,
}

/// A verified batch for a 750 ml bottle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceBatch {
    pub id: &'static str,
    pub name: &'static str,
    pub base_spirit: &'static str,
    pub base_spirit_abv: f64,
    pub pour_off_oz: f64,
    pub add_back: &'static [AddBack],
    pub water_oz: f64,
}

const fn add(name: &'static str, oz: f64, abv: f64) -> AddBack {
    AddBack { name, oz, abv }
}

pub const REFERENCE_BATCHES: &[ReferenceBatch] = &[
    // Margarita and negroni are measured batches and do not add up to a full
    // bottle. Keep these values as they are.
    ReferenceBatch {
        id: "margarita",
        name: "Margarita",
        base_spirit: "Blanco tequila",
        base_spirit_abv: 40.0,
        pour_off_oz: 10.0,
        add_back: &[
            add("Lime juice", 5.0, 0.0),
            add("Orange liqueur", 4.0, 40.0),
            add("Agave syrup", 1.5, 0.0),
        ],
        water_oz: 0.0,
    },
    ReferenceBatch {
        id: "negroni",
        name: "Negroni",
        base_spirit: "London dry gin",
        base_spirit_abv: 40.0,
        pour_off_oz: 16.0,
        add_back: &[add("Sweet vermouth", 7.0, 16.5), add("Campari", 7.0, 24.0)],
        water_oz: 0.0,
    },
    ReferenceBatch {
        id: "manhattan",
        name: "Manhattan",
        base_spirit: "Rye whiskey",
        base_spirit_abv: 45.0,
        pour_off_oz: 8.5,
        add_back: &[
            add("Sweet vermouth", 6.0, 16.5),
            add("Angostura bitters", 0.5, 44.7),
        ],
        water_oz: 2.0,
    },
    ReferenceBatch {
        id: "old-fashioned",
        name: "Old Fashioned",
        base_spirit: "Bourbon",
        base_spirit_abv: 45.0,
        pour_off_oz: 4.25,
        add_back: &[
            add("Demerara syrup", 1.5, 0.0),
            add("Angostura bitters", 0.5, 44.7),
            add("Orange bitters", 0.25, 45.0),
        ],
        water_oz: 2.0,
    },
    ReferenceBatch {
        id: "martini",
        name: "Martini",
        base_spirit: "London dry gin",
        base_spirit_abv: 47.0,
        pour_off_oz: 7.0,
        add_back: &[
            add("Dry vermouth", 5.0, 17.0),
            add("Orange bitters", 0.25, 45.0),
        ],
        water_oz: 1.75,
    },
    ReferenceBatch {
        id: "boulevardier",
        name: "Boulevardier",
        base_spirit: "Bourbon",
        base_spirit_abv: 45.0,
        pour_off_oz: 14.0,
        add_back: &[add("Sweet vermouth", 6.0, 16.5), add("Campari", 6.0, 24.0)],
        water_oz: 2.0,
    },
    ReferenceBatch {
        id: "daiquiri",
        name: "Daiquiri",
        base_spirit: "White rum",
        base_spirit_abv: 40.0,
        pour_off_oz: 10.0,
        add_back: &[add("Lime juice", 5.0, 0.0), add("Simple syrup", 3.5, 0.0)],
        water_oz: 1.5,
    },
    ReferenceBatch {
        id: "gimlet",
        name: "Gimlet",
        base_spirit: "London dry gin",
        base_spirit_abv: 40.0,
        pour_off_oz: 8.0,
        add_back: &[add("Lime juice", 4.0, 0.0), add("Simple syrup", 3.0, 0.0)],
        water_oz: 1.0,
    },
    ReferenceBatch {
        id: "cosmopolitan",
        name: "Cosmopolitan",
        base_spirit: "Citrus vodka",
        base_spirit_abv: 40.0,
        pour_off_oz: 12.0,
        add_back: &[
            add("Orange liqueur", 4.0, 40.0),
            add("Cranberry juice", 5.0, 0.0),
            add("Lime juice", 2.5, 0.0),
        ],
        water_oz: 0.5,
    },
    ReferenceBatch {
        id: "espresso-martini",
        name: "Espresso Martini",
        base_spirit: "Vodka",
        base_spirit_abv: 40.0,
        pour_off_oz: 12.0,
        add_back: &[
            add("Coffee liqueur", 5.0, 20.0),
            add("Cold brew concentrate", 5.0, 0.0),
            add("Simple syrup", 1.0, 0.0),
        ],
        water_oz: 1.0,
    },
    ReferenceBatch {
        id: "whiskey-sour",
        name: "Whiskey Sour",
        base_spirit: "Bourbon",
        base_spirit_abv: 45.0,
        pour_off_oz: 10.0,
        add_back: &[add("Lemon juice", 5.0, 0.0), add("Simple syrup", 4.0, 0.0)],
        water_oz: 1.0,
    },
    ReferenceBatch {
        id: "sidecar",
        name: "Sidecar",
        base_spirit: "Cognac",
        base_spirit_abv: 40.0,
        pour_off_oz: 10.0,
        add_back: &[add("Orange liqueur", 5.0, 40.0), add("Lemon juice", 4.0, 0.0)],
        water_oz: 1.0,
    },
    ReferenceBatch {
        id: "last-word",
        name: "Last Word",
        base_spirit: "London dry gin",
        base_spirit_abv: 40.0,
        pour_off_oz: 15.0,
        add_back: &[
            add("Green Chartreuse", 5.0, 55.0),
            add("Maraschino liqueur", 5.0, 32.0),
            add("Lime juice", 5.0, 0.0),
        ],
        water_oz: 0.0,
    },
];

/// Look up a reference batch by id
pub fn reference_batch(id: &str) -> Option<&'static ReferenceBatch> {
    REFERENCE_BATCHES.iter().find(|batch| batch.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_thirteen_unique_batches() {
        assert_eq!(REFERENCE_BATCHES.len(), 13);
        let ids: HashSet<_> = REFERENCE_BATCHES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_amounts_are_quarter_aligned() {
        let aligned = |oz: f64| (oz * 4.0).fract() == 0.0;
        for batch in REFERENCE_BATCHES {
            assert!(aligned(batch.pour_off_oz), "{} pour-off", batch.id);
            assert!(aligned(batch.water_oz), "{} water", batch.id);
            for item in batch.add_back {
                assert!(aligned(item.oz), "{} {}", batch.id, item.name);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let margarita = reference_batch("margarita").unwrap();
        assert_eq!(margarita.pour_off_oz, 10.0);
        assert_eq!(margarita.add_back[0].name, "Lime juice");
        assert!(reference_batch("mojito").is_none());
    }
}
