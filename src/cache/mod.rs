//! In-memory store holding one entry per topic.

mod entry;

pub use entry::CacheEntry;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::news::Topic;

#[derive(Default)]
struct Slot {
    entry: RwLock<CacheEntry>,
    refresh: Mutex<()>,
}

/// Both topic entries exist for the whole life of the store; they are only
/// ever replaced, never removed.
#[derive(Default)]
pub struct NewsCache {
    crypto: Slot,
    gold: Slot,
}

impl NewsCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, topic: Topic) -> &Slot {
        match topic {
            Topic::Crypto => &self.crypto,
            Topic::Gold => &self.gold,
        }
    }

    pub async fn get(&self, topic: Topic) -> CacheEntry {
        self.slot(topic).entry.read().await.clone()
    }

    /// Replaces the whole entry in one write.
    pub async fn store(&self, topic: Topic, entry: CacheEntry) {
        *self.slot(topic).entry.write().await = entry;
    }

    /// Notes a failed refresh without touching data, timestamp or country.
    pub async fn record_failure(&self, topic: Topic, message: String) {
        self.slot(topic).entry.write().await.last_error = Some(message);
    }

    /// Held for the duration of a refresh so refreshes of one topic never overlap.
    pub async fn lock_refresh(&self, topic: Topic) -> MutexGuard<'_, ()> {
        self.slot(topic).refresh.lock().await
    }
}
