//! # Filesystem-backed cache
//!
//! [`FileCache`] persists each cache key as one file under a base directory.
//! It is used on native platforms (desktop builds and the server-rendered
//! first paint) where no `localStorage` exists.
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/linkforge/` on Linux.

use std::path::PathBuf;

use crate::cache::CacheStore;

/// Filesystem-backed CacheStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileCache {
    base: PathBuf,
}

impl FileCache {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl CacheStore for FileCache {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{self, DOCUMENT_KEY};
    use crate::defaults::default_document;

    #[tokio::test]
    async fn test_file_cache_round_trip() {
        let dir = std::env::temp_dir().join(format!("linkforge_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileCache::new(dir.clone());
        let doc = default_document();
        cache::write_document(&store, &doc).await;

        // Re-open from the same directory
        let store2 = FileCache::new(dir.clone());
        assert_eq!(cache::read_document(&store2).await, Some(doc));

        store2.remove(DOCUMENT_KEY).await;
        assert!(cache::read_document(&store2).await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
