use log::debug;
use scraper::{Html, Selector};

/// Where rendered pages usually keep their method list, most specific first.
const STEP_SELECTORS: &[&str] = &[
    "#recipe-steps li",
    ".recipe-steps li",
    "[data-step]",
    "ol.instructions li",
    ".instructions li",
    ".method li",
];

/// Step texts from the page's rendered instruction list, used when the
/// structured data has no instructions. Empty when nothing matches.
pub fn steps_from_document(document: &Html) -> Vec<String> {
    for css in STEP_SELECTORS {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };

        let texts: Vec<String> = document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if !texts.is_empty() {
            debug!("Found {} rendered steps with '{}'", texts.len(), css);
            return texts;
        }
    }
    Vec::new()
}
