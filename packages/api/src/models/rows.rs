//! # Row models for the `profiles` and `sections` tables
//!
//! Server-only structs deriving [`sqlx::FromRow`] plus projections into the
//! client-safe `store` types.
//!
//! ## [`ProfileRow`]
//!
//! The complete `profiles` row: display fields, a `socials` JSON column, the
//! plaintext `password` column (never sent to the client as part of the
//! profile — it crosses the boundary only through the dedicated password
//! endpoints), and audit timestamps. [`ProfileRow::into_profile`] converts the
//! `Uuid` to a `String` so the result works in WASM.
//!
//! ## [`SectionRow`]
//!
//! The complete `sections` row. The `type` tag and `data` JSON column are
//! recombined into a typed [`store::SectionData`] by
//! [`SectionRow::into_section`]; rows whose tag is unknown or whose payload
//! does not decode are dropped with a warning, so one bad row never takes
//! down the whole document.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::types::Json;
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

#[cfg(feature = "server")]
use store::{Profile, Section, SectionData, SocialLink};

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub location: String,
    pub image: String,
    pub email: String,
    pub socials: Json<Vec<SocialLink>>,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ProfileRow {
    /// Convert to the client-safe profile (id stringified, password omitted).
    pub fn into_profile(self) -> Profile {
        Profile {
            id: Some(self.id.to_string()),
            name: self.name,
            title: self.title,
            location: self.location,
            image: self.image,
            email: self.email,
            socials: self.socials.0,
        }
    }
}

/// Full section record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SectionRow {
    pub id: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub is_visible: bool,
    pub data: Json<serde_json::Value>,
    pub position: i32,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl SectionRow {
    /// Recombine the tag and payload columns into a typed section. Rows with
    /// an unknown tag or an undecodable payload are dropped.
    pub fn into_section(self) -> Option<Section> {
        match SectionData::from_payload(&self.kind, self.data.0) {
            Ok(data) => Some(Section {
                id: self.id,
                title: self.title,
                subtitle: self.subtitle,
                visible: self.is_visible,
                data,
            }),
            Err(e) => {
                tracing::warn!(
                    section = %self.id,
                    kind = %self.kind,
                    error = %e,
                    "dropping section row with undecodable payload"
                );
                None
            }
        }
    }
}
