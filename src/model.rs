use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::instructions::InstructionNode;

/// Servings assumed when a recipe has no usable yield.
pub const DEFAULT_SERVINGS: u32 = 4;

/// A schema.org Recipe node, as produced by the page extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "recipeYield", default)]
    pub recipe_yield: Option<RecipeYield>,
    #[serde(rename = "recipeServings", default)]
    pub recipe_servings: Option<RecipeYield>,
    #[serde(
        rename = "recipeIngredient",
        default,
        deserialize_with = "lenient_strings"
    )]
    pub recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions", default)]
    pub recipe_instructions: InstructionNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeYield {
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Objects, booleans and anything else; never yields a count
    Other(Value),
}

impl RecipeYield {
    /// Leading integer of the yield, the way `parseInt` reads it.
    fn leading_int(&self) -> Option<u32> {
        match self {
            RecipeYield::Number(n) if n.is_finite() && *n >= 1.0 => Some(n.trunc() as u32),
            RecipeYield::Number(_) => None,
            RecipeYield::String(s) => leading_int(s),
            RecipeYield::Array(items) => {
                let joined = items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                leading_int(&joined)
            }
            RecipeYield::Other(_) => None,
        }
    }
}

fn leading_int(s: &str) -> Option<u32> {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl Recipe {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Untitled Recipe",
        }
    }

    /// Base servings: `recipeYield`, then `recipeServings`, then 4.
    pub fn base_servings(&self) -> u32 {
        self.base_servings_or(DEFAULT_SERVINGS)
    }

    /// Like [`Recipe::base_servings`] with a caller-supplied fallback.
    pub fn base_servings_or(&self, default: u32) -> u32 {
        [&self.recipe_yield, &self.recipe_servings]
            .into_iter()
            .flatten()
            .filter_map(RecipeYield::leading_int)
            .find(|n| *n > 0)
            .unwrap_or(default)
    }
}

/// Accepts any JSON for an optional string; non-strings become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts any JSON for a list of strings: non-arrays become empty and
/// non-string entries are skipped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// One alternate surface form of an ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub text: String,
    pub key: String,
}

/// An ingredient line split into quantity, unit and name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedIngredient {
    pub raw: String,
    /// Unscaled amount for the recipe's stated yield
    pub quantity: Option<f64>,
    /// Unit token as written, empty when none was recognised
    pub unit: String,
    pub name: String,
    pub primary_key: String,
    /// Longest first; never empty
    pub variants: Vec<Variant>,
}

impl ParsedIngredient {
    /// The name, or the raw line when nothing is left after parsing.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.raw
        } else {
            &self.name
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.variants.iter().any(|v| v.key == key)
    }
}

/// A located ingredient mention. `start` and `end` are byte offsets into
/// the step text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
    /// Primary key of the ingredient that produced the match
    pub ingredient_key: String,
    /// Key of the variant that matched
    pub variant_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionStep {
    pub text: String,
    /// Sorted by `start`, never overlapping
    pub annotations: Vec<Annotation>,
}

/// A recipe ready for display: parsed ingredients and annotated steps at
/// the recipe's base servings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRecipe {
    pub name: String,
    pub base_servings: u32,
    pub ingredients: Vec<ParsedIngredient>,
    pub steps: Vec<InstructionStep>,
}

impl PreparedRecipe {
    /// Factor applied to every quantity when cooking `servings`.
    pub fn scale_factor(&self, servings: u32) -> f64 {
        crate::amount::scale_factor(servings, self.base_servings)
    }

    /// The ingredient an annotation key refers to.
    pub fn lookup(&self, key: &str) -> Option<&ParsedIngredient> {
        crate::lookup_ingredient_by_annotation_key(key, &self.ingredients)
    }
}
