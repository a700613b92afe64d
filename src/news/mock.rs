use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::news::{Country, FetchError, NewsFetcher, NewsItem, Topic};

/// In-process fetcher returning generated headlines.
///
/// Each result carries the topic, country and call sequence number it was
/// produced for, so callers can tell which fetch a cache entry came from.
#[derive(Default)]
pub struct MockFetcher {
    calls: AtomicUsize,
    failure: Mutex<Option<u16>>,
    delays: Mutex<HashMap<String, Duration>>,
    articles: usize,
}

impl MockFetcher {
    pub fn new(articles: usize) -> Self {
        Self {
            articles,
            ..Default::default()
        }
    }

    /// Makes every following fetch fail with the given upstream status, or succeed again with `None`.
    pub fn fail_with_status(&self, status: Option<u16>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = status;
    }

    /// Delays fetches for one country.
    pub fn delay_for(&self, country: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(country.to_string(), delay);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsFetcher for MockFetcher {
    async fn fetch_news(
        &self,
        topic: Topic,
        country: &Country,
    ) -> Result<Vec<NewsItem>, FetchError> {
        let seq = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        let delay = self
            .delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(country.as_str())
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = *self.failure.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(status) = failure {
            return Err(FetchError::Status(status));
        }

        Ok((0..self.articles)
            .map(|i| {
                json!({
                    "title": format!("{topic} headline {i}"),
                    "topic": topic,
                    "country": country,
                    "seq": seq,
                })
            })
            .collect())
    }
}
