//! Default ABV by ingredient category
//!
//! Keys are lowercase. Order matters: substring matching returns the first
//! hit, so more specific names sit ahead of the generic ones they contain.

pub const ABV_SUGGESTIONS: &[(&str, f64)] = &[
    // Base spirits
    ("vodka", 40.0),
    ("gin", 40.0),
    ("tequila", 40.0),
    ("mezcal", 40.0),
    ("rum", 40.0),
    ("bourbon", 45.0),
    ("rye", 45.0),
    ("whiskey", 40.0),
    ("whisky", 40.0),
    ("scotch", 40.0),
    ("cognac", 40.0),
    ("brandy", 40.0),
    ("pisco", 40.0),
    ("cachaca", 40.0),
    ("absinthe", 60.0),
    // Liqueurs and amari
    ("green chartreuse", 55.0),
    ("yellow chartreuse", 40.0),
    ("chartreuse", 55.0),
    ("orange liqueur", 40.0),
    ("cointreau", 40.0),
    ("grand marnier", 40.0),
    ("triple sec", 30.0),
    ("maraschino", 32.0),
    ("coffee liqueur", 20.0),
    ("amaretto", 24.0),
    ("elderflower liqueur", 20.0),
    ("st-germain", 20.0),
    ("benedictine", 40.0),
    ("campari", 24.0),
    ("aperol", 11.0),
    ("fernet", 39.0),
    ("amaro", 30.0),
    ("liqueur", 25.0),
    // Fortified and aromatized wines
    ("sweet vermouth", 16.5),
    ("dry vermouth", 17.0),
    ("vermouth", 16.0),
    ("lillet", 17.0),
    ("sherry", 17.0),
    ("port", 20.0),
    // Bitters
    ("angostura", 44.7),
    ("bitters", 44.7),
    // Low and no alcohol
    ("sake", 15.0),
    ("prosecco", 11.0),
    ("champagne", 12.0),
    ("wine", 12.0),
    ("beer", 5.0),
    ("juice", 0.0),
    ("syrup", 0.0),
    ("agave", 0.0),
    ("honey", 0.0),
    ("cold brew", 0.0),
    ("espresso", 0.0),
    ("coffee", 0.0),
    ("cream", 0.0),
    ("soda", 0.0),
    ("tonic", 0.0),
    ("water", 0.0),
];
