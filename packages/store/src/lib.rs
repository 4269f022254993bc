pub mod cache;
pub mod defaults;
pub mod models;
pub mod remote;
pub mod sync;

mod memory;
pub use memory::MemoryCache;

mod memory_remote;
pub use memory_remote::MemoryRemote;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileCache;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_store::WebCache;

pub use cache::{CacheStore, AUTH_KEY, DOCUMENT_KEY, SESSION_KEY};
pub use defaults::{default_document, DEFAULT_PASSWORD};
pub use models::{
    BookData, CreativityData, Document, GalleryItem, LinkItem, LinksData, Profile, ReadingData,
    ReadingItem, Section, SectionData, SocialLink, WritingData,
};
pub use remote::{RemoteError, RemoteStore};
pub use sync::{Loaded, PasswordChangeError, SyncEngine};
