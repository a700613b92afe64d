use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::news::{Country, NewsItem};

/// Last known result for one topic.
///
/// `data` and `last_update` are only ever set together, by a successful
/// refresh. `country` is the country the next refresh will use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CacheEntry {
    pub data: Option<Arc<Vec<NewsItem>>>,
    pub last_update: Option<DateTime<Utc>>,
    pub country: Country,
    /// Message of the most recent failed refresh, cleared by the next success.
    pub last_error: Option<String>,
}

impl CacheEntry {
    pub fn populated(news: Vec<NewsItem>, country: Country, fetched_at: DateTime<Utc>) -> Self {
        Self {
            data: Some(Arc::new(news)),
            last_update: Some(fetched_at),
            country,
            last_error: None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn news(&self) -> &[NewsItem] {
        self.data.as_deref().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn article_count(&self) -> usize {
        self.news().len()
    }

    /// True when the entry was never filled or its age has reached `max_age`.
    /// A `last_update` in the future counts as fresh.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        let (Some(_), Some(last_update)) = (&self.data, self.last_update) else {
            return true;
        };

        match (now - last_update).to_std() {
            Ok(age) => age >= max_age,
            Err(_) => false,
        }
    }
}
