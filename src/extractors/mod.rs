use crate::error::PlaitError;
use crate::model::Recipe;
use scraper::Html;

mod json_ld;
mod steps_list;

pub use json_ld::{find_recipe_node, recipe_from_node, JsonLdExtractor};
pub use steps_list::steps_from_document;

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: &str, html: &str) -> Self {
        Self {
            url: url.to_string(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    fn parse(&self, context: &ParsingContext) -> Result<Recipe, PlaitError>;
}
