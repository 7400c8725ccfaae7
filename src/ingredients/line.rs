use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::quantity::parse_quantity;
use super::variants::{name_variants, normalize_key};
use super::vocab::is_unit;
use crate::model::{ParsedIngredient, Variant};

/// Optional whole part, then a decimal or fraction, then whitespace.
static LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*((?:\d+\s+)?\d*(?:\.\d+)?(?:\s*/\s*\d+)?)\s+(.*)$")
        .expect("leading quantity pattern should be valid")
});

const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Rewrite "1½" and "½" as "1 1/2" and "1/2" so the quantity pattern sees
/// plain ASCII.
fn expand_vulgar_fractions(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    for c in line.chars() {
        match VULGAR_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                if out.ends_with(|p: char| p.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

/// Split one ingredient line into quantity, unit and name.
///
/// Never fails: a line without a recognisable amount keeps the whole text
/// as its name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let raw = line.trim().to_string();
    let expanded = expand_vulgar_fractions(&raw);

    let (quantity, rest) = match LEADING_QUANTITY.captures(&expanded) {
        Some(caps) if !caps[1].trim().is_empty() => {
            (parse_quantity(&caps[1]), caps[2].trim().to_string())
        }
        _ => (None, expanded.clone()),
    };

    let mut tokens: Vec<&str> = rest.split_whitespace().collect();
    let unit = match tokens.first() {
        Some(first) if is_unit(first) => tokens.remove(0).to_string(),
        _ => String::new(),
    };

    let name = match tokens.join(" ") {
        joined if joined.is_empty() => rest.clone(),
        joined => joined,
    };

    let mut variants = name_variants(&name);
    if variants.is_empty() && !raw.is_empty() {
        variants.push(Variant::new(raw.clone()));
    }

    trace!(
        "parsed {:?}: quantity={:?} unit={:?} name={:?} ({} variants)",
        raw,
        quantity,
        unit,
        name,
        variants.len()
    );

    ParsedIngredient {
        primary_key: normalize_key(&name),
        raw,
        quantity,
        unit,
        name,
        variants,
    }
}
