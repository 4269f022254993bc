//! # Remote store contract
//!
//! [`RemoteStore`] is the thin row-level handle over the two remote tables
//! (`profiles`, `sections`). It carries no reconciliation logic of its own;
//! the [`crate::SyncEngine`] drives it. Implementations:
//!
//! - [`crate::MemoryRemote`] — in-memory two-table store for tests, with
//!   failure injection.
//! - `ServerFnRemote` (in the `ui` package) — forwards every method to the
//!   `api` server functions backed by PostgreSQL.

use crate::models::{Profile, Section};

/// Failure talking to or decoding from the remote store.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Transport failure or server-side error.
    #[error("remote store unreachable: {0}")]
    Unreachable(String),
    /// A row came back but could not be decoded.
    #[error("remote row malformed: {0}")]
    Malformed(String),
}

/// Row-level operations over the `profiles` and `sections` tables.
pub trait RemoteStore {
    /// The singleton profile row, or `None` when the table is empty.
    async fn fetch_profile(&self) -> Result<Option<Profile>, RemoteError>;

    /// All section rows ordered by `position`.
    async fn fetch_sections(&self) -> Result<Vec<Section>, RemoteError>;

    /// Upsert the profile row. When the profile carries no id, an existing
    /// row id is adopted if one exists; otherwise a fresh row is created
    /// without supplying a password (the column default applies). Returns
    /// the stored profile with its id populated.
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RemoteError>;

    /// Upsert every section row with `position` set to its array index.
    async fn upsert_sections(&self, sections: &[Section]) -> Result<(), RemoteError>;

    /// Insert a fresh profile row with an explicit password.
    async fn insert_profile(&self, profile: &Profile, password: &str)
        -> Result<Profile, RemoteError>;

    /// Insert fresh section rows with positions taken from array order.
    async fn insert_sections(&self, sections: &[Section]) -> Result<(), RemoteError>;

    /// Unconditionally delete all rows from both tables.
    async fn delete_all(&self) -> Result<(), RemoteError>;

    /// The password column of the singleton profile row.
    async fn fetch_password(&self) -> Result<Option<String>, RemoteError>;

    /// Unconditionally update the password on all profile rows.
    async fn update_password(&self, new_password: &str) -> Result<(), RemoteError>;
}
