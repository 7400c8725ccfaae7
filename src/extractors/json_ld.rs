use super::{Extractor, ParsingContext};
use crate::error::PlaitError;
use crate::model::Recipe;
use html_escape::decode_html_entities;
use log::{debug, warn};
use scraper::Selector;
use serde_json::Value;
use std::sync::LazyLock;

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script[type='application/ld+json']").expect("valid JSON-LD selector")
});

pub struct JsonLdExtractor;

fn is_recipe_type(type_value: Option<&Value>) -> bool {
    match type_value {
        Some(Value::String(t)) => t.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case("recipe")),
        _ => false,
    }
}

/// The first Recipe node in a JSON-LD value: the value itself, an element
/// of a top-level array, or a member of `@graph`.
pub fn find_recipe_node(json_ld: Value) -> Option<Value> {
    match json_ld {
        Value::Array(items) => items.into_iter().find_map(find_recipe_node),
        Value::Object(mut map) => {
            if is_recipe_type(map.get("@type")) {
                return Some(Value::Object(map));
            }
            map.remove("@graph").and_then(find_recipe_node)
        }
        _ => None,
    }
}

/// Deserialize a Recipe node, decoding HTML entities in every string.
pub fn recipe_from_node(node: Value) -> Result<Recipe, PlaitError> {
    Ok(serde_json::from_value(decode_strings(node))?)
}

fn decode_html_symbols(text: &str) -> String {
    // entities are often double-encoded ("&amp;frac12;")
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

fn decode_strings(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(decode_html_symbols(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(decode_strings).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, decode_strings(v)))
                .collect(),
        ),
        other => other,
    }
}

fn sanitize_json(json_str: &str) -> String {
    let mut trimmed = json_str.trim();

    // Skip any junk before the first object
    if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
        if let Some(start) = trimmed.find('{') {
            trimmed = &trimmed[start..];
        }
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = trimmed;

    while let Some(c) = rest.chars().next() {
        if in_string {
            cleaned.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }

        // HTML comment markers wrapped around the JSON, never inside strings
        if let Some(after) = rest.strip_prefix("<!--").or_else(|| rest.strip_prefix("-->")) {
            rest = after;
            continue;
        }

        match c {
            '"' => in_string = true,
            ',' => {
                let next = rest[1..].trim_start().chars().next();
                if matches!(next, Some(']' | '}')) {
                    debug!("Dropping trailing comma");
                    rest = &rest[1..];
                    continue;
                }
            }
            _ => {}
        }
        cleaned.push(c);
        rest = &rest[c.len_utf8()..];
    }

    cleaned
}

impl Extractor for JsonLdExtractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, PlaitError> {
        debug!("JsonLdExtractor: Starting parse for URL: {}", context.url);

        for (index, script) in context.document.select(&SCRIPT_SELECTOR).enumerate() {
            let cleaned_json = sanitize_json(&script.inner_html());
            let json_ld = match serde_json::from_str::<Value>(&cleaned_json) {
                Ok(json_ld) => json_ld,
                Err(e) => {
                    warn!("JsonLdExtractor: Skipping malformed JSON-LD block {index}: {e}");
                    continue;
                }
            };

            let Some(node) = find_recipe_node(json_ld) else {
                debug!("JsonLdExtractor: No recipe in JSON-LD block {index}");
                continue;
            };

            match recipe_from_node(node) {
                Ok(recipe) => {
                    debug!(
                        "JsonLdExtractor: Found \"{}\" with {} ingredient lines",
                        recipe.display_name(),
                        recipe.recipe_ingredient.len()
                    );
                    return Ok(recipe);
                }
                Err(e) => warn!("JsonLdExtractor: Unusable recipe in block {index}: {e}"),
            }
        }

        Err(PlaitError::NoRecipeFound)
    }
}
