use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error sending request to news API")]
    Request(#[from] reqwest::Error),

    #[error("News API returned status {0}")]
    Status(u16),

    #[error("Error decoding news API response")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown news type '{0}'")]
    Topic(String),

    #[error("unsupported country code '{0}'")]
    Country(String),
}
