//! # API crate — shared fullstack server functions for the bio-link site
//!
//! The thin remote-store client: every public `async fn` here is a Dioxus
//! server function exposing one row-level operation over the two content
//! tables (`profiles`, `sections`), plus the outbound feed-bridge fetch. No
//! reconciliation logic lives here; the sync engine in the `store` crate
//! drives these operations through the `ui` crate's `ServerFnRemote`.
//!
//! ## Operations
//!
//! - **Profile row**: [`get_profile`], [`upsert_profile`], [`insert_profile`]
//! - **Section rows**: [`list_sections`], [`upsert_sections`], [`insert_sections`]
//! - **Bulk**: [`delete_all_rows`] (unconditional wipe of both tables)
//! - **Password column**: [`get_password`], [`set_password`]
//! - **Feed bridge**: [`fetch_feed`] (read-only, never persisted)
//!
//! Bodies run only on the server (feature `server`); client builds get thin
//! stubs that forward the call over HTTP.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod db;
pub mod models;

use store::{Profile, Section};

/// One article returned by the feed-to-JSON bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
    #[serde(default)]
    pub link: String,
}

/// Response envelope of the feed-to-JSON bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

#[cfg(feature = "server")]
const FEED_BRIDGE_URL: &str = "https://api.rss2json.com/v1/api.json";

/// The singleton profile row, or `None` when the table is empty.
#[server(GetProfile)]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProfileRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles LIMIT 1")
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.into_profile()))
}

/// All section rows ordered by position. Rows with undecodable payloads are
/// dropped server-side.
#[server(ListSections)]
pub async fn list_sections() -> Result<Vec<Section>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::SectionRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<SectionRow> =
        sqlx::query_as("SELECT * FROM sections ORDER BY position ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().filter_map(|r| r.into_section()).collect())
}

/// Upsert the profile row. When no id is known, an existing row id is
/// adopted if one exists; otherwise a fresh row is inserted without a
/// password, relying on the column default.
#[server(UpsertProfile)]
pub async fn upsert_profile(profile: Profile) -> Result<Profile, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProfileRow;
    use sqlx::types::Json;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let resolved_id = match &profile.id {
        Some(id) => {
            Some(uuid::Uuid::parse_str(id).map_err(|e| ServerFnError::new(e.to_string()))?)
        }
        None => sqlx::query_as::<_, (uuid::Uuid,)>("SELECT id FROM profiles LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
            .map(|(id,)| id),
    };

    let row: ProfileRow = match resolved_id {
        Some(id) => sqlx::query_as(
            "INSERT INTO profiles (id, name, title, location, image, email, socials, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
             ON CONFLICT (id) DO UPDATE SET
                name = $2,
                title = $3,
                location = $4,
                image = $5,
                email = $6,
                socials = $7,
                updated_at = NOW()
             RETURNING *",
        )
        .bind(id)
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.location)
        .bind(&profile.image)
        .bind(&profile.email)
        .bind(Json(&profile.socials))
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
        None => sqlx::query_as(
            "INSERT INTO profiles (name, title, location, image, email, socials)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.location)
        .bind(&profile.image)
        .bind(&profile.email)
        .bind(Json(&profile.socials))
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(row.into_profile())
}

/// Upsert every section row, with position set to the array index.
#[server(UpsertSections)]
pub async fn upsert_sections(sections: Vec<Section>) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use sqlx::types::Json;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for (index, section) in sections.iter().enumerate() {
        sqlx::query(
            "INSERT INTO sections (id, type, title, subtitle, is_visible, data, position, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
             ON CONFLICT (id) DO UPDATE SET
                type = $2,
                title = $3,
                subtitle = $4,
                is_visible = $5,
                data = $6,
                position = $7,
                updated_at = NOW()",
        )
        .bind(&section.id)
        .bind(section.data.kind())
        .bind(&section.title)
        .bind(&section.subtitle)
        .bind(section.visible)
        .bind(Json(section.data.to_payload()))
        .bind(index as i32)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    Ok(())
}

/// Insert a fresh profile row with an explicit password (first-run seeding).
#[server(InsertProfile)]
pub async fn insert_profile(profile: Profile, password: String) -> Result<Profile, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProfileRow;
    use sqlx::types::Json;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ProfileRow = sqlx::query_as(
        "INSERT INTO profiles (name, title, location, image, email, socials, password)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&profile.name)
    .bind(&profile.title)
    .bind(&profile.location)
    .bind(&profile.image)
    .bind(&profile.email)
    .bind(Json(&profile.socials))
    .bind(&password)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.into_profile())
}

/// Insert fresh section rows with positions taken from array order
/// (first-run seeding).
#[server(InsertSections)]
pub async fn insert_sections(sections: Vec<Section>) -> Result<(), ServerFnError> {
    use crate::db::get_pool;
    use sqlx::types::Json;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for (index, section) in sections.iter().enumerate() {
        sqlx::query(
            "INSERT INTO sections (id, type, title, subtitle, is_visible, data, position)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&section.id)
        .bind(section.data.kind())
        .bind(&section.title)
        .bind(&section.subtitle)
        .bind(section.visible)
        .bind(Json(section.data.to_payload()))
        .bind(index as i32)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    }

    Ok(())
}

/// Unconditionally delete all rows from both tables. Destructive; only the
/// reset flow calls this.
#[server(DeleteAllRows)]
pub async fn delete_all_rows() -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM sections")
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    sqlx::query("DELETE FROM profiles")
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// The password column of the singleton profile row.
#[server(GetPassword)]
pub async fn get_password() -> Result<Option<String>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(String,)> = sqlx::query_as("SELECT password FROM profiles LIMIT 1")
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|(password,)| password))
}

/// Unconditionally update the password on all profile rows (at most one row
/// exists in practice).
#[server(SetPassword)]
pub async fn set_password(new_password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET password = $1, updated_at = NOW()")
        .bind(&new_password)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

/// Fetch articles for a writing section through the feed-to-JSON bridge.
/// Read-only, no retry; the result is never persisted.
#[server(FetchFeed)]
pub async fn fetch_feed(feed_url: String) -> Result<FeedResponse, ServerFnError> {
    let response = reqwest::Client::new()
        .get(FEED_BRIDGE_URL)
        .query(&[("rss_url", feed_url.as_str())])
        .send()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let feed: FeedResponse = response
        .json()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(feed)
}
