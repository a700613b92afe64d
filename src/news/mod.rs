pub mod client;
pub mod error;
/// Test double for [`NewsFetcher`], used by unit and integration tests.
pub mod mock;
pub mod types;

use async_trait::async_trait;

pub use client::SerpApiClient;
pub use error::{FetchError, InputError};
pub use types::{Country, NewsItem, Topic};

#[async_trait]
pub trait NewsFetcher: Send + Sync {
    async fn fetch_news(&self, topic: Topic, country: &Country)
        -> Result<Vec<NewsItem>, FetchError>;
}
