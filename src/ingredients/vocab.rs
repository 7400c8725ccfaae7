//! Fixed word lists used by the ingredient parser.

/// Unit tokens recognised as the first word after the quantity.
pub const UNIT_WORDS: &[&str] = &[
    "teaspoon", "teaspoons", "tsp", "tablespoon", "tablespoons", "tbsp",
    "cup", "cups", "ounce", "ounces", "oz", "pound", "pounds", "lb", "lbs",
    "gram", "grams", "g", "kilogram", "kilograms", "kg", "milliliter", "milliliters", "ml",
    "liter", "liters", "l", "clove", "cloves", "pinch", "pinches", "dash", "dashes",
    "can", "cans", "package", "packages", "packet", "packets",
    "head", "heads", "stalk", "stalks", "ear", "ears", "slice", "slices",
];

/// Size, state and preparation words dropped from names before matching.
pub const DESCRIPTORS: &[&str] = &[
    "fresh", "large", "small", "medium", "extra", "extra-large", "xl", "jumbo", "optional",
    "chopped", "minced", "diced", "shredded", "sliced", "crushed", "softened", "melted",
    "divided", "room-temperature", "room", "temperature", "to", "taste", "rinsed", "drained",
    "packed", "granulated", "powdered", "ground", "all-purpose", "kosher", "virgin",
    "toasted", "warm", "cold", "hot", "unsalted", "salted", "can", "cans", "bottle", "bottles",
    "jar", "jars",
];

/// Words naming a part of an ingredient rather than the ingredient itself.
pub const PART_WORDS: &[&str] = &[
    "leaf", "leaves", "sprig", "sprigs", "stalk", "stalks", "stem", "stems", "floret",
    "florets", "wedge", "wedges", "clove", "cloves", "bunch", "bunches",
];

pub fn is_unit(word: &str) -> bool {
    UNIT_WORDS.contains(&word.to_lowercase().as_str())
}

pub fn is_descriptor(word: &str) -> bool {
    DESCRIPTORS.contains(&word.to_lowercase().as_str())
}

pub fn is_part_word(word: &str) -> bool {
    PART_WORDS.contains(&word.to_lowercase().as_str())
}
