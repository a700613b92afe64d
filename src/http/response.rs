use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::cache::{CacheEntry, NewsCache};
use crate::news::Topic;

pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn last_update(entry: &CacheEntry) -> Value {
    entry
        .last_update
        .map(|ts| Value::String(format_timestamp(ts)))
        .unwrap_or(Value::Null)
}

pub fn entry_status(entry: &CacheEntry) -> Value {
    json!({
        "status": if entry.has_data() { "OK" } else { "NO_DATA" },
        "lastUpdate": last_update(entry),
        "country": entry.country,
        "articlesCount": entry.article_count(),
        "lastError": entry.last_error,
    })
}

/// Status of every topic, keyed by topic name.
pub async fn cache_status(cache: &NewsCache) -> Value {
    let mut topics = Map::new();
    for topic in Topic::ALL {
        let entry = cache.get(topic).await;
        topics.insert(topic.to_string(), entry_status(&entry));
    }
    Value::Object(topics)
}
