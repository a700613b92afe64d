use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_LANGUAGE: &str = "fr";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Settings for the upstream news search API.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    /// Response language preference (`hl`).
    pub language: String,
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("SERPAPI_API_KEY")
            .map_err(|_| ConfigError::Missing("SERPAPI_API_KEY"))?;
        let base_url =
            std::env::var("SERPAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let language =
            std::env::var("NEWS_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            base_url,
            api_key,
            language,
        })
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

// keeps the key out of logs
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}
