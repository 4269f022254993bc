//! # Local cache contract and blob helpers
//!
//! The local cache holds a single serialized [`Document`] blob plus a legacy
//! auth-fallback blob, each under a fixed key. It is a read cache: reads must
//! be cheap and synchronous-feeling, and a corrupted or unavailable backing
//! store degrades to "no local data" rather than an error.

use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Key of the serialized document blob.
pub const DOCUMENT_KEY: &str = "bio_link_data_v1";
/// Key of the legacy auth-fallback blob (`{"password": ...}`). Largely
/// superseded by the remote password column but still consulted when the
/// remote store is unreachable or empty.
pub const AUTH_KEY: &str = "bio_link_auth_v1";
/// Key of the local "authenticated" flag set after a successful login.
pub const SESSION_KEY: &str = "bio_link_authenticated";

/// Key/value store for the local mirror. Writes swallow errors; reads return
/// `None` on any failure.
pub trait CacheStore {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String);
    async fn remove(&self, key: &str);
}

/// Shape of the legacy auth-fallback blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthFallback {
    pub password: String,
}

/// Read and decode the cached document. Malformed blobs read as `None`.
pub async fn read_document<C: CacheStore>(cache: &C) -> Option<Document> {
    let raw = cache.get(DOCUMENT_KEY).await?;
    match serde_json::from_str(&raw) {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::warn!(error = %e, "discarding undecodable cached document");
            None
        }
    }
}

/// Serialize and store the document blob.
pub async fn write_document<C: CacheStore>(cache: &C, document: &Document) {
    match serde_json::to_string(document) {
        Ok(raw) => cache.set(DOCUMENT_KEY, raw).await,
        Err(e) => tracing::error!(error = %e, "failed to serialize document for cache"),
    }
}

/// Read the locally cached fallback password, if any.
pub async fn read_auth_fallback<C: CacheStore>(cache: &C) -> Option<AuthFallback> {
    let raw = cache.get(AUTH_KEY).await?;
    serde_json::from_str(&raw).ok()
}

/// Mirror a password into the local fallback blob.
pub async fn write_auth_fallback<C: CacheStore>(cache: &C, password: &str) {
    let blob = AuthFallback {
        password: password.to_string(),
    };
    if let Ok(raw) = serde_json::to_string(&blob) {
        cache.set(AUTH_KEY, raw).await;
    }
}
