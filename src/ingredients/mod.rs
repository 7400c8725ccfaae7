mod line;
mod quantity;
mod variants;
pub mod vocab;

use log::debug;

use crate::model::ParsedIngredient;

pub use self::line::parse_ingredient;
pub use self::quantity::parse_quantity;
pub use self::variants::{name_variants, normalize_key, to_singular};

/// Parse every non-blank ingredient line, in order.
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Vec<ParsedIngredient> {
    let parsed: Vec<ParsedIngredient> = lines
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient)
        .collect();

    debug!(
        "Parsed {} ingredients ({} with quantities)",
        parsed.len(),
        parsed.iter().filter(|i| i.quantity.is_some()).count()
    );
    parsed
}
