//! Grocery list built from parsed ingredients, grouped by store aisle.
//!
//! Aisles are assigned by keyword; this is independent of the annotation
//! engine and only looks at the rendered grocery line.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::amount::{format_amount, scale};
use crate::model::ParsedIngredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aisle {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Household,
    Other,
}

impl Aisle {
    /// Display order; also the order keywords are tried in.
    pub const ALL: [Aisle; 10] = [
        Aisle::Produce,
        Aisle::Meat,
        Aisle::Seafood,
        Aisle::Dairy,
        Aisle::Bakery,
        Aisle::Pantry,
        Aisle::Frozen,
        Aisle::Beverages,
        Aisle::Household,
        Aisle::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aisle::Produce => "Produce",
            Aisle::Meat => "Meat",
            Aisle::Seafood => "Seafood",
            Aisle::Dairy => "Dairy",
            Aisle::Bakery => "Bakery",
            Aisle::Pantry => "Pantry",
            Aisle::Frozen => "Frozen",
            Aisle::Beverages => "Beverages",
            Aisle::Household => "Household",
            Aisle::Other => "Other",
        }
    }
}

impl fmt::Display for Aisle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static AISLE_KEYWORDS: LazyLock<Vec<(Aisle, Regex)>> = LazyLock::new(|| {
    [
        (Aisle::Produce, r"apple|banana|orange|lemon|lime|cilantro|onion|garlic|tomato|pepper|jalape[ñn]o|lettuce|spinach|kale|carrot|potato|avocado|herb|basil|parsley|scallion|chive|cabbage|cucumber|zucchini|poblano|chile|chili"),
        (Aisle::Meat, r"chicken|beef|pork|steak|ground beef|sausage|bacon|turkey"),
        (Aisle::Seafood, r"shrimp|salmon|tuna|cod|tilapia|fish"),
        (Aisle::Dairy, r"milk|cream|butter|cheese|yogurt|sour cream|half[- ]and[- ]half|mozzarella|cheddar|parmesan|cream cheese"),
        (Aisle::Bakery, r"bread|bun|roll|bagel|tortilla|pita"),
        (Aisle::Pantry, r"flour|sugar|salt|pepper|cumin|paprika|chili powder|oil|olive oil|vinegar|broth|stock|pasta|rice|beans|salsa|spice|seasoning|baking|yeast|vanilla|canned|can"),
        (Aisle::Frozen, r"frozen|ice cream|peas|corn|fries"),
        (Aisle::Beverages, r"juice|soda|coffee|tea"),
        (Aisle::Household, r"paper towel|napkin|foil|wrap|soap|detergent"),
    ]
    .into_iter()
    .map(|(aisle, words)| {
        let regex = Regex::new(&format!(r"(?i)\b(?:{words})\b"))
            .expect("aisle keyword pattern should be valid");
        (aisle, regex)
    })
    .collect()
});

/// The first aisle whose keywords appear in `raw`, else [`Aisle::Other`].
pub fn categorize(raw: &str) -> Aisle {
    AISLE_KEYWORDS
        .iter()
        .find(|(_, regex)| regex.is_match(raw))
        .map_or(Aisle::Other, |(aisle, _)| *aisle)
}

/// One line on the grocery list. Serialisable for whatever store keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub raw: String,
    pub name: String,
    pub unit: String,
    pub qty: Option<f64>,
    #[serde(default)]
    pub checked: bool,
}

impl GroceryItem {
    pub fn aisle(&self) -> Aisle {
        categorize(&self.raw)
    }
}

/// Grocery items for the ingredients at the given scale.
pub fn grocery_items(ingredients: &[ParsedIngredient], factor: f64) -> Vec<GroceryItem> {
    ingredients
        .iter()
        .map(|ing| {
            let qty = scale(ing.quantity, factor);
            let amount = qty.map(format_amount).unwrap_or_default();
            let raw = [amount.as_str(), ing.unit.as_str(), ing.name.as_str()]
                .iter()
                .flat_map(|part| part.split_whitespace())
                .collect::<Vec<_>>()
                .join(" ");
            GroceryItem {
                raw,
                name: ing.name.clone(),
                unit: ing.unit.clone(),
                qty,
                checked: false,
            }
        })
        .collect()
}

/// Append the items not already on the list (compared case-insensitively
/// by their line). Returns how many were added.
pub fn merge_groceries(existing: &mut Vec<GroceryItem>, items: Vec<GroceryItem>) -> usize {
    let before = existing.len();
    for item in items {
        let duplicate = existing
            .iter()
            .any(|e| e.raw.to_lowercase() == item.raw.to_lowercase());
        if !duplicate {
            existing.push(item);
        }
    }
    existing.len() - before
}

/// Non-empty aisles in display order, items in list order.
pub fn group_by_aisle(items: &[GroceryItem]) -> Vec<(Aisle, Vec<&GroceryItem>)> {
    Aisle::ALL
        .iter()
        .map(|&aisle| {
            let in_aisle: Vec<&GroceryItem> =
                items.iter().filter(|item| item.aisle() == aisle).collect();
            (aisle, in_aisle)
        })
        .filter(|(_, in_aisle)| !in_aisle.is_empty())
        .collect()
}

/// Shareable plain-text list, or `None` when there is nothing on it.
pub fn export_groceries(items: &[GroceryItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let mut note = String::from("Grocery List\n\n");
    for (aisle, in_aisle) in group_by_aisle(items) {
        note.push_str(&aisle.as_str().to_uppercase());
        note.push('\n');
        for item in in_aisle {
            let mark = if item.checked { '✓' } else { '○' };
            note.push_str(&format!("{mark} {}\n", item.raw));
        }
        note.push('\n');
    }
    Some(note.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::parse_ingredients;

    #[test]
    fn test_categorize() {
        assert_eq!(categorize("2 cloves garlic"), Aisle::Produce);
        assert_eq!(categorize("1 lb ground beef"), Aisle::Meat);
        assert_eq!(categorize("Half-and-half"), Aisle::Dairy);
        assert_eq!(categorize("2 cups all-purpose flour"), Aisle::Pantry);
        assert_eq!(categorize("1 jalapeño"), Aisle::Produce);
        assert_eq!(categorize("1 bag ice"), Aisle::Other);
    }

    #[test]
    fn test_first_matching_aisle_wins() {
        // "pepper" is listed under both produce and pantry
        assert_eq!(categorize("black pepper"), Aisle::Produce);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert_eq!(categorize("scallions"), Aisle::Other);
        assert_eq!(categorize("teaspoon cinnamon"), Aisle::Other);
    }

    #[test]
    fn test_grocery_items_are_scaled() {
        let ingredients = parse_ingredients(&["1 1/2 cups milk", "Salt"]);
        let items = grocery_items(&ingredients, 2.0);
        assert_eq!(items[0].raw, "3 cups milk");
        assert_eq!(items[0].qty, Some(3.0));
        assert_eq!(items[1].raw, "Salt");
        assert_eq!(items[1].qty, None);
    }

    #[test]
    fn test_merge_skips_duplicates() {
        let ingredients = parse_ingredients(&["1 cup milk", "2 eggs"]);
        let mut list = grocery_items(&ingredients, 1.0);

        let again = parse_ingredients(&["1 Cup Milk", "1 lemon"]);
        let added = merge_groceries(&mut list, grocery_items(&again, 1.0));

        assert_eq!(added, 1);
        assert_eq!(list.len(), 3);
        assert_eq!(list[2].raw, "1 lemon");
    }

    #[test]
    fn test_export_groceries() {
        let ingredients = parse_ingredients(&["1 cup milk", "1 lemon", "2 cups rice"]);
        let mut items = grocery_items(&ingredients, 1.0);
        items[1].checked = true;

        let note = export_groceries(&items).unwrap();
        assert_eq!(
            note,
            "Grocery List\n\nPRODUCE\n✓ 1 lemon\n\nDAIRY\n○ 1 cup milk\n\nPANTRY\n○ 2 cups rice"
        );
        assert!(export_groceries(&[]).is_none());
    }

    #[test]
    fn test_grocery_item_json() {
        let item: GroceryItem =
            serde_json::from_str(r#"{"raw":"1 lemon","name":"lemon","unit":"","qty":1.0}"#)
                .unwrap();
        assert!(!item.checked);
        assert_eq!(item.aisle(), Aisle::Produce);
    }
}
