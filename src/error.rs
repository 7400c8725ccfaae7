use thiserror::Error;

/// Errors that can occur while retrieving or loading a recipe
///
/// Parsing and annotation never fail; these only come from the fetch,
/// extraction, configuration and file layers around them.
#[derive(Error, Debug)]
pub enum PlaitError {
    /// Failed to fetch the page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page answered with a non-success status
    #[error("Fetch failed with status: {0}")]
    HttpStatus(u16),

    /// No Recipe node was found in the page or document
    #[error("No recipe found")]
    NoRecipeFound,

    /// A recipe document could not be interpreted
    #[error("Failed to parse recipe: {0}")]
    ParseError(String),

    /// Invalid JSON in a recipe document
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Reading a local recipe file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
