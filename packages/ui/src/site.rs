//! Site content context: cached-first document state shared by every view.
//!
//! [`SiteProvider`] renders the locally cached document immediately, then
//! refreshes from the remote store in the background. Views read the state
//! through [`use_site`]; the admin surface writes back into it after a
//! successful save so the public page reflects edits without a reload.

use dioxus::prelude::*;
use store::{CacheStore, Document, Loaded, SyncEngine};

use crate::remote::ServerFnRemote;

/// Build the platform-appropriate local cache:
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Native**: one file per key under the platform data directory
pub fn make_cache() -> impl CacheStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebCache::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("linkforge");
        store::FileCache::new(base)
    }
}

/// Build a sync engine over the server-function remote and the platform cache.
pub fn make_engine() -> SyncEngine<ServerFnRemote, impl CacheStore> {
    SyncEngine::new(ServerFnRemote, make_cache())
}

/// Shared document state.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    pub document: Document,
    /// The remote refresh failed; `document` is the cached (or default) copy.
    pub stale: bool,
    /// The remote store holds no content yet.
    pub uninitialized: bool,
    pub loading: bool,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            document: store::default_document(),
            stale: false,
            uninitialized: false,
            loading: true,
        }
    }
}

/// The shared site state. Updates when the background refresh lands or the
/// admin surface publishes a saved document.
pub fn use_site() -> Signal<SiteState> {
    use_context::<Signal<SiteState>>()
}

/// Push a freshly saved document into the shared state.
pub fn publish_document(site: &mut Signal<SiteState>, document: Document) {
    site.set(SiteState {
        document,
        stale: false,
        uninitialized: false,
        loading: false,
    });
}

/// Provider component that owns the shared document state.
/// Wrap the app with this to enable [`use_site`].
#[component]
pub fn SiteProvider(children: Element) -> Element {
    let mut site = use_signal(SiteState::default);

    // Cached copy first, remote refresh after.
    let _ = use_resource(move || async move {
        let engine = make_engine();

        let cached = engine.cached().await;
        site.set(SiteState {
            document: cached,
            stale: false,
            uninitialized: false,
            loading: true,
        });

        match engine.load().await {
            Loaded::Fresh(document) => {
                site.set(SiteState {
                    document,
                    stale: false,
                    uninitialized: false,
                    loading: false,
                });
            }
            Loaded::Stale(document) => {
                tracing::warn!("remote refresh failed; showing cached content");
                site.set(SiteState {
                    document,
                    stale: true,
                    uninitialized: false,
                    loading: false,
                });
            }
            Loaded::Uninitialized => {
                let current = site();
                site.set(SiteState {
                    uninitialized: true,
                    loading: false,
                    ..current
                });
            }
        }
    });

    use_context_provider(|| site);

    rsx! {
        {children}
    }
}
