use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::news::{Country, FetchError, NewsFetcher, NewsItem, Topic};

const SEARCH_ENGINE: &str = "google_news";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    news_results: Option<Vec<NewsItem>>,
}

/// Google News search through SerpApi.
#[derive(Debug, Clone)]
pub struct SerpApiClient {
    client: Client,
    config: UpstreamConfig,
}

impl SerpApiClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: UpstreamConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl NewsFetcher for SerpApiClient {
    async fn fetch_news(
        &self,
        topic: Topic,
        country: &Country,
    ) -> Result<Vec<NewsItem>, FetchError> {
        debug!("requesting {} news for {}", topic, country);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", topic.query()),
                ("gl", country.as_str()),
                ("hl", self.config.language.as_str()),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: SearchResponse = serde_json::from_str(&text)?;

        Ok(body.news_results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> SerpApiClient {
        SerpApiClient::new(UpstreamConfig::new(
            format!("{}/search.json", server.url()),
            "test-key",
        ))
    }

    #[tokio::test]
    async fn test_fetch_sends_topic_query_and_country() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("engine".into(), "google_news".into()),
                Matcher::UrlEncoded("q".into(), "gold market price trading".into()),
                Matcher::UrlEncoded("gl".into(), "de".into()),
                Matcher::UrlEncoded("hl".into(), "fr".into()),
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "news_results": [
                        {"title": "Gold hits record", "link": "https://example.com/a"},
                        {"title": "Bullion slips", "source": {"name": "Wire"}}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let news = client_for(&server)
            .fetch_news(Topic::Gold, &Country::parse("de").unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(news.len(), 2);
        assert_eq!(news[0]["title"], "Gold hits record");
        assert_eq!(news[1]["source"]["name"], "Wire");
    }

    #[tokio::test]
    async fn test_missing_results_field_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"search_metadata": {"status": "Success"}}"#)
            .create_async()
            .await;

        let news = client_for(&server)
            .fetch_news(Topic::Crypto, &Country::default())
            .await
            .unwrap();

        assert!(news.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body(r#"{"error": "rate limited"}"#)
            .create_async()
            .await;

        let result = client_for(&server)
            .fetch_news(Topic::Crypto, &Country::default())
            .await;

        assert!(matches!(result, Err(FetchError::Status(429))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let result = client_for(&server)
            .fetch_news(Topic::Gold, &Country::default())
            .await;

        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
