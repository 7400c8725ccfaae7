//! Recipe ingredient parsing and instruction annotation.
//!
//! Ingredient lines are split into quantity, unit and name, each name gets
//! a set of matchable variants, and instruction text is segmented into
//! steps whose ingredient mentions are located by byte offset.

pub mod amount;
pub mod annotate;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod groceries;
pub mod ingredients;
pub mod instructions;
pub mod model;
pub mod render;

use log::debug;

pub use amount::{format_amount, scale, scale_factor};
pub use annotate::{annotate_steps, Annotator};
pub use config::{load_config, PlaitConfig};
pub use error::PlaitError;
pub use fetch::{fetch_recipe, import_page, ImportedPage, RequestFetcher};
pub use ingredients::{parse_ingredient, parse_ingredients, parse_quantity};
pub use instructions::{segment_instructions, InstructionNode};
pub use model::{Annotation, InstructionStep, ParsedIngredient, PreparedRecipe, Recipe};

/// Segment an instruction tree and annotate every step.
pub fn build_steps(tree: &InstructionNode, ingredients: &[ParsedIngredient]) -> Vec<InstructionStep> {
    annotate_steps(&segment_instructions(tree), ingredients)
}

/// Like [`build_steps`], falling back to `fallback_lines` (the page's
/// rendered step list) when the tree has no instructions.
pub fn build_steps_with_fallback<S: AsRef<str>>(
    tree: &InstructionNode,
    fallback_lines: &[S],
    ingredients: &[ParsedIngredient],
) -> Vec<InstructionStep> {
    let steps = instructions::segment_with_fallback(tree, fallback_lines);
    annotate_steps(&steps, ingredients)
}

/// The ingredient an annotation key refers to: a primary key match first,
/// then any ingredient owning a variant with that key.
pub fn lookup_ingredient_by_annotation_key<'a>(
    key: &str,
    ingredients: &'a [ParsedIngredient],
) -> Option<&'a ParsedIngredient> {
    ingredients
        .iter()
        .find(|ing| ing.primary_key == key)
        .or_else(|| ingredients.iter().find(|ing| ing.has_key(key)))
}

/// Parse, segment and annotate a recipe in one go.
pub fn prepare_recipe<S: AsRef<str>>(recipe: &Recipe, fallback_lines: &[S]) -> PreparedRecipe {
    prepare_recipe_with_servings(recipe, fallback_lines, model::DEFAULT_SERVINGS)
}

/// Like [`prepare_recipe`] with the servings assumed when the recipe
/// states none.
pub fn prepare_recipe_with_servings<S: AsRef<str>>(
    recipe: &Recipe,
    fallback_lines: &[S],
    default_servings: u32,
) -> PreparedRecipe {
    let ingredients = parse_ingredients(&recipe.recipe_ingredient);
    let steps = build_steps_with_fallback(&recipe.recipe_instructions, fallback_lines, &ingredients);

    let prepared = PreparedRecipe {
        name: recipe.display_name().to_string(),
        base_servings: recipe.base_servings_or(default_servings),
        ingredients,
        steps,
    };
    debug!(
        "Prepared \"{}\": {} ingredients, {} steps, serves {}",
        prepared.name,
        prepared.ingredients.len(),
        prepared.steps.len(),
        prepared.base_servings
    );
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe(value: serde_json::Value) -> Recipe {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lookup_prefers_primary_key() {
        let ingredients = parse_ingredients(&["2 green onions", "1 onion"]);

        // "onion" is a variant of "green onions" but the primary key of the second line
        let found = lookup_ingredient_by_annotation_key("onion", &ingredients).unwrap();
        assert_eq!(found.raw, "1 onion");

        let found = lookup_ingredient_by_annotation_key("green onion", &ingredients).unwrap();
        assert_eq!(found.raw, "2 green onions");

        assert!(lookup_ingredient_by_annotation_key("tofu", &ingredients).is_none());
    }

    #[test]
    fn test_every_annotation_resolves_to_its_ingredient() {
        let ingredients = parse_ingredients(&["1 onion", "2 green onions", "3 cloves garlic"]);
        let steps = build_steps(
            &InstructionNode::from("Fry the onion and garlic. Add green onions."),
            &ingredients,
        );

        for step in &steps {
            for annotation in &step.annotations {
                let owner = lookup_ingredient_by_annotation_key(&annotation.ingredient_key, &ingredients)
                    .unwrap();
                assert!(owner.has_key(&annotation.variant_key));
            }
        }
    }

    #[test]
    fn test_prepare_recipe() {
        let r = recipe(json!({
            "name": "Pesto",
            "recipeYield": "2 servings",
            "recipeIngredient": ["1 1/2 cups chopped fresh basil leaves", "2 cloves garlic", ""],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Blend the basil and garlic. Season to taste."}
            ]
        }));
        let prepared = prepare_recipe::<&str>(&r, &[]);

        assert_eq!(prepared.name, "Pesto");
        assert_eq!(prepared.base_servings, 2);
        assert_eq!(prepared.ingredients.len(), 2);
        assert_eq!(prepared.steps.len(), 2);
        assert_eq!(prepared.steps[0].text, "Blend the basil and garlic.");
        assert_eq!(prepared.steps[0].annotations.len(), 2);
        assert_eq!(prepared.scale_factor(4), 2.0);
        assert_eq!(prepared.lookup("basil").unwrap().quantity, Some(1.5));
    }

    #[test]
    fn test_prepare_recipe_uses_fallback_lines() {
        let r = recipe(json!({"name": "Toast", "recipeIngredient": ["1 slice bread"]}));
        let prepared = prepare_recipe_with_servings(&r, &["Toast the bread."], 1);

        assert_eq!(prepared.base_servings, 1);
        assert_eq!(prepared.steps.len(), 1);
        assert_eq!(prepared.steps[0].annotations[0].matched_text, "bread");
    }
}
