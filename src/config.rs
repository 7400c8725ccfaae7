use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the importer and the CLI
#[derive(Debug, Deserialize, Clone)]
pub struct PlaitConfig {
    /// Servings assumed when a recipe states no usable yield
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent when fetching recipe pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for PlaitConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_servings() -> u32 {
    4
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; PlaitBot/1.0)".to_string()
}

impl PlaitConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with PLAIT__ prefix
/// 2. plait.toml file in current directory
/// 3. Default values
///
/// Environment variable format: PLAIT__TIMEOUT
pub fn load_config() -> Result<PlaitConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("plait").required(false))
        .add_source(
            Environment::with_prefix("PLAIT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
