//! Refresh policy: the only writer of the news cache.
//!
//! A refresh fetches one topic for one country and, on success, replaces the
//! topic's entry with the new articles, the fetch time and that country in a
//! single write. A failed refresh leaves the entry as it was and only records
//! the error message. Refreshes of the same topic are serialised through the
//! topic's refresh lock, so the final state always comes from exactly one fetch.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, error, info};

use crate::cache::{CacheEntry, NewsCache};
use crate::news::{Country, FetchError, NewsFetcher, Topic};

/// Entries older than this are refetched.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(2 * 60 * 60);

pub struct Refresher {
    cache: Arc<NewsCache>,
    fetcher: Arc<dyn NewsFetcher>,
    interval: Duration,
}

impl Refresher {
    pub fn new(cache: Arc<NewsCache>, fetcher: Arc<dyn NewsFetcher>, interval: Duration) -> Self {
        Self {
            cache,
            fetcher,
            interval,
        }
    }

    pub fn cache(&self) -> &NewsCache {
        &self.cache
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn should_refresh(&self, topic: Topic) -> bool {
        self.should_refresh_at(topic, Utc::now()).await
    }

    pub async fn should_refresh_at(&self, topic: Topic, now: DateTime<Utc>) -> bool {
        self.cache.get(topic).await.is_stale(now, self.interval)
    }

    /// Fetches `topic` for `country` and stores the result, returning the article count.
    pub async fn update_cache(&self, topic: Topic, country: Country) -> Result<usize, FetchError> {
        let _guard = self.cache.lock_refresh(topic).await;
        self.update_locked(topic, country).await
    }

    async fn update_locked(&self, topic: Topic, country: Country) -> Result<usize, FetchError> {
        info!("updating {} cache for {}", topic, country);

        match self.fetcher.fetch_news(topic, &country).await {
            Ok(news) => {
                let count = news.len();
                self.cache
                    .store(topic, CacheEntry::populated(news, country, Utc::now()))
                    .await;
                info!("{} cache updated with {} articles", topic, count);
                Ok(count)
            }
            Err(e) => {
                self.cache.record_failure(topic, e.to_string()).await;
                Err(e)
            }
        }
    }

    /// Like [`Refresher::update_cache`], but logs and swallows upstream failures.
    /// Returns whether the entry was updated.
    pub async fn refresh(&self, topic: Topic, country: Country) -> bool {
        settle(topic, self.update_cache(topic, country).await)
    }

    /// Refreshes `topic` at the country stored for it once the refresh lock is
    /// held, so a country change still in flight is not overwritten.
    pub async fn refresh_current(&self, topic: Topic) -> bool {
        let _guard = self.cache.lock_refresh(topic).await;

        let country = self.cache.get(topic).await.country;
        settle(topic, self.update_locked(topic, country).await)
    }

    /// Refreshes `topic` only if it is stale once the refresh lock is held, so
    /// readers queued behind an in-flight refresh reuse its result.
    pub async fn refresh_if_stale(&self, topic: Topic) -> bool {
        let _guard = self.cache.lock_refresh(topic).await;

        let entry = self.cache.get(topic).await;
        if !entry.is_stale(Utc::now(), self.interval) {
            debug!("{} cache is fresh", topic);
            return false;
        }

        settle(topic, self.update_locked(topic, entry.country).await)
    }

    /// Refreshes every topic concurrently at its current country.
    pub async fn refresh_all(&self) {
        let results = join_all(Topic::ALL.map(|topic| self.refresh_current(topic))).await;
        let updated = results.iter().filter(|ok| **ok).count();
        info!("refreshed {}/{} topics", updated, results.len());
    }
}

fn settle(topic: Topic, result: Result<usize, FetchError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            error!("failed to update {} cache: {}: {:?}", topic, e, e.source());
            false
        }
    }
}
