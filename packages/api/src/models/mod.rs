//! Database row models for the site content tables.

mod rows;

#[cfg(feature = "server")]
pub use rows::{ProfileRow, SectionRow};
