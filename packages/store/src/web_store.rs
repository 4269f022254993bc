//! # Browser `localStorage` cache
//!
//! [`WebCache`] is the [`CacheStore`] used on the web platform. The mirror is
//! a synchronous key/value blob, so `localStorage` fits it exactly: the public
//! page can read the cached document at mount without awaiting the network.
//!
//! All methods silently swallow errors. A blocked or unavailable storage area
//! degrades to "no local data" rather than crashing; the authoritative copy
//! always lives in the remote store.

use crate::cache::CacheStore;

/// `window.localStorage`-backed CacheStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebCache;

impl WebCache {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CacheStore for WebCache {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, &value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
