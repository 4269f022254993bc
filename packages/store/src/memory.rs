use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::cache::CacheStore;

/// In-memory CacheStore for testing and ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{self, DOCUMENT_KEY};
    use crate::defaults::default_document;

    #[tokio::test]
    async fn test_document_blob_round_trip() {
        let cache = MemoryCache::new();
        assert!(cache::read_document(&cache).await.is_none());

        let doc = default_document();
        cache::write_document(&cache, &doc).await;
        assert_eq!(cache::read_document(&cache).await, Some(doc));

        cache.remove(DOCUMENT_KEY).await;
        assert!(cache::read_document(&cache).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_blob_reads_as_none() {
        let cache = MemoryCache::new();
        cache.set(DOCUMENT_KEY, "{not json".to_string()).await;
        assert!(cache::read_document(&cache).await.is_none());
    }

    #[tokio::test]
    async fn test_auth_fallback_blob() {
        let cache = MemoryCache::new();
        assert!(cache::read_auth_fallback(&cache).await.is_none());

        cache::write_auth_fallback(&cache, "hunter2").await;
        let blob = cache::read_auth_fallback(&cache).await.unwrap();
        assert_eq!(blob.password, "hunter2");
    }
}
