//! [`ServerFnRemote`]: the production [`store::RemoteStore`] implementation.
//!
//! Every method forwards to the matching server function in the `api` crate
//! and maps transport or server-side failures into
//! [`store::RemoteError::Unreachable`].

use store::{Profile, RemoteError, RemoteStore, Section};

/// Remote store backed by the fullstack server functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnRemote;

fn unreachable(e: impl std::fmt::Display) -> RemoteError {
    RemoteError::Unreachable(e.to_string())
}

impl RemoteStore for ServerFnRemote {
    async fn fetch_profile(&self) -> Result<Option<Profile>, RemoteError> {
        api::get_profile().await.map_err(unreachable)
    }

    async fn fetch_sections(&self) -> Result<Vec<Section>, RemoteError> {
        api::list_sections().await.map_err(unreachable)
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RemoteError> {
        api::upsert_profile(profile.clone()).await.map_err(unreachable)
    }

    async fn upsert_sections(&self, sections: &[Section]) -> Result<(), RemoteError> {
        api::upsert_sections(sections.to_vec())
            .await
            .map_err(unreachable)
    }

    async fn insert_profile(
        &self,
        profile: &Profile,
        password: &str,
    ) -> Result<Profile, RemoteError> {
        api::insert_profile(profile.clone(), password.to_string())
            .await
            .map_err(unreachable)
    }

    async fn insert_sections(&self, sections: &[Section]) -> Result<(), RemoteError> {
        api::insert_sections(sections.to_vec())
            .await
            .map_err(unreachable)
    }

    async fn delete_all(&self) -> Result<(), RemoteError> {
        api::delete_all_rows().await.map_err(unreachable)
    }

    async fn fetch_password(&self) -> Result<Option<String>, RemoteError> {
        api::get_password().await.map_err(unreachable)
    }

    async fn update_password(&self, new_password: &str) -> Result<(), RemoteError> {
        api::set_password(new_password.to_string())
            .await
            .map_err(unreachable)
    }
}
