//! Alternate surface forms of an ingredient name.
//!
//! A name like "chopped fresh basil leaves" is mentioned in instructions as
//! "basil leaves", "basil" or "the basil leaf". The generator expands one name
//! into the strings worth searching for, longest first, so the annotator tries
//! specific phrases before generic ones.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::vocab::{is_descriptor, is_part_word};
use crate::model::Variant;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthesis pattern should be valid"));

static CONJUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:and|or|&|/)\b").expect("conjunction pattern should be valid")
});

/// Variants shorter than this many characters are dropped.
const MIN_VARIANT_CHARS: usize = 3;

/// Lowercase, turn everything outside `[a-z0-9]` and whitespace into a
/// space, then collapse whitespace.
pub fn normalize_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Variant {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let key = normalize_key(&text);
        Variant { text, key }
    }
}

/// Expand an ingredient name into match candidates, longest first.
///
/// Falls back to the trimmed name itself when every generated form is too
/// short, so a non-empty name always yields at least one variant.
pub fn name_variants(name: &str) -> Vec<Variant> {
    let no_paren = collapse_whitespace(&PARENTHESIZED.replace_all(name, " "));
    let before_comma = no_paren.split(',').next().unwrap_or("").trim().to_string();

    let segments = CONJUNCTION
        .split(&before_comma)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    let candidates = [name.to_string(), no_paren.clone(), before_comma.clone()]
        .into_iter()
        .chain(segments);

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for candidate in candidates {
        let filtered = candidate
            .split_whitespace()
            .filter(|token| !is_descriptor(token))
            .collect::<Vec<_>>()
            .join(" ");
        let tokens: Vec<&str> = filtered.split_whitespace().collect();
        let Some((&head, rest)) = tokens.split_last() else {
            continue;
        };
        let head = head.to_string();

        let mut forms = vec![candidate.clone(), filtered.clone(), head.clone()];
        // "basil leaves" is also mentioned as just "basil"
        if is_part_word(&head) && !rest.is_empty() {
            forms.push(rest.join(" "));
            forms.push(rest[rest.len() - 1].to_string());
        }
        let singulars: Vec<String> = forms.iter().map(|form| to_singular(form)).collect();

        for form in forms.into_iter().chain(singulars) {
            let form = form.trim().to_string();
            if seen.insert(form.clone()) {
                results.push(form);
            }
        }
    }

    let mut variants: Vec<Variant> = results
        .into_iter()
        .filter(|s| s.chars().count() >= MIN_VARIANT_CHARS)
        .map(Variant::new)
        .collect();
    variants.sort_by(|a, b| b.text.chars().count().cmp(&a.text.chars().count()));

    if variants.is_empty() && !name.trim().is_empty() {
        variants.push(Variant::new(name.trim()));
    }
    variants
}

/// Singularise the last word of a phrase with suffix rules.
///
/// Heuristic only: "cheeses" becomes "chees" and "cookies" becomes "cooky".
pub fn to_singular(phrase: &str) -> String {
    let mut words: Vec<&str> = phrase.split_whitespace().collect();
    let Some(last) = words.pop() else {
        return phrase.trim().to_string();
    };

    let lower = last.to_ascii_lowercase();
    let stem = |suffix_len: usize| &last[..last.len() - suffix_len];
    let singular = if lower.ends_with("ies") {
        format!("{}y", stem(3))
    } else if lower.ends_with("oes") {
        stem(2).to_string()
    } else if ["xes", "ches", "shes", "ses"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        stem(2).to_string()
    } else if lower.ends_with("ves") {
        format!("{}f", stem(3))
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        stem(1).to_string()
    } else {
        last.to_string()
    };

    words.push(&singular);
    words.join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(name: &str) -> Vec<String> {
        name_variants(name).into_iter().map(|v| v.text).collect()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Green-Onions, sliced "), "green onions sliced");
        assert_eq!(normalize_key("Jalapeño"), "jalape o");
        assert_eq!(normalize_key("***"), "");
    }

    #[test]
    fn test_singular_rules() {
        assert_eq!(to_singular("cherries"), "cherry");
        assert_eq!(to_singular("potatoes"), "potato");
        assert_eq!(to_singular("boxes"), "box");
        assert_eq!(to_singular("peaches"), "peach");
        assert_eq!(to_singular("radishes"), "radish");
        assert_eq!(to_singular("glasses"), "glass");
        assert_eq!(to_singular("halves"), "half");
        assert_eq!(to_singular("green onions"), "green onion");
        assert_eq!(to_singular("molasses"), "molass");
        assert_eq!(to_singular("grass"), "grass");
        assert_eq!(to_singular("Tomatoes"), "Tomato");
        assert_eq!(to_singular(""), "");
    }

    #[test]
    fn test_basil_scenario() {
        let variants = texts("chopped fresh basil leaves");
        assert!(variants.contains(&"chopped fresh basil leaves".to_string()));
        assert!(variants.contains(&"basil leaves".to_string()));
        assert!(variants.contains(&"basil leaf".to_string()));
        assert!(variants.contains(&"leaves".to_string()));
        assert!(variants.contains(&"leaf".to_string()));
        assert!(variants.contains(&"basil".to_string()));
        assert!(!variants.contains(&"chopped".to_string()));
    }

    #[test]
    fn test_longest_first_and_unique() {
        let variants = texts("green onions, thinly sliced");
        let lengths: Vec<usize> = variants.iter().map(|v| v.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));

        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
        assert!(variants.contains(&"green onions".to_string()));
        assert!(variants.contains(&"onion".to_string()));
    }

    #[test]
    fn test_conjunction_split() {
        let variants = texts("Salt and pepper");
        assert!(variants.contains(&"Salt".to_string()));
        assert!(variants.contains(&"pepper".to_string()));
        assert!(variants.contains(&"Salt and pepper".to_string()));
    }

    #[test]
    fn test_parenthetical_removed() {
        let variants = texts("butter (softened)");
        assert!(variants.contains(&"butter (softened)".to_string()));
        assert!(variants.contains(&"butter".to_string()));
    }

    #[test]
    fn test_short_fragments_dropped() {
        assert!(texts("oil").contains(&"oil".to_string()));
        assert!(texts("chopped egg").iter().all(|v| v.chars().count() > 2));
    }

    #[test]
    fn test_fallback_keeps_name() {
        assert_eq!(texts("to taste"), vec!["to taste"]);
        assert_eq!(texts("ox"), vec!["ox"]);
        assert!(texts("   ").is_empty());
    }

    #[test]
    fn test_variant_keys() {
        for v in name_variants("Green-Onion (white parts)") {
            assert_eq!(v.key, normalize_key(&v.text));
        }
    }
}
