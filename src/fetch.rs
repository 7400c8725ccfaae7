//! Page retrieval. The only part of the crate that touches the network.

use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::PlaitConfig;
use crate::error::PlaitError;
use crate::extractors::{steps_from_document, Extractor, JsonLdExtractor, ParsingContext};
use crate::model::Recipe;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, PlaitError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &PlaitConfig) -> Result<Self, PlaitError> {
        Self::new(Some(Duration::from_secs(config.timeout)), &config.user_agent)
    }

    pub async fn fetch(&self, url: &str) -> Result<String, PlaitError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlaitError::HttpStatus(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// What a recipe page gives us: the structured recipe plus the rendered
/// instruction list, kept for when the structured steps are empty.
#[derive(Debug, Clone)]
pub struct ImportedPage {
    pub recipe: Recipe,
    pub fallback_steps: Vec<String>,
    pub source_url: String,
}

/// Extract the recipe and fallback steps from an already fetched page.
pub fn import_page(url: &str, html: &str) -> Result<ImportedPage, PlaitError> {
    let context = ParsingContext::new(url, html);
    let recipe = JsonLdExtractor.parse(&context)?;
    let fallback_steps = steps_from_document(&context.document);

    Ok(ImportedPage {
        recipe,
        fallback_steps,
        source_url: url.to_string(),
    })
}

/// Fetch a recipe page and extract its recipe.
pub async fn fetch_recipe(url: &str, config: &PlaitConfig) -> Result<ImportedPage, PlaitError> {
    debug!("Fetching recipe from {url}");
    let html = RequestFetcher::from_config(config)?.fetch(url).await?;
    debug!("Fetched {} bytes from {url}", html.len());
    import_page(url, &html)
}
