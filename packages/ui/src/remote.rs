//! Server-function adapter for the shared profile store.
//!
//! [`ApiStore`] implements [`store::ProfileStore`] by delegating every call to
//! the server functions in the `api` crate, so the board logic in `store` can
//! run against the real backend and against [`store::MemoryStore`] in tests
//! without changing shape.

use store::{LinkRecord, OrderUpdate, ProfileStore, SocialMediaRecord, StoreError, UserProfile};

/// Profile backend that talks to the server over the generated API routes.
///
/// Server-function failures arrive as one opaque error type, so every failure
/// maps to [`StoreError::Unavailable`] with the server's message preserved.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiStore;

impl ProfileStore for ApiStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        api::get_profile(user_id.to_string())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn save_order(&self, user_id: &str, updates: &[OrderUpdate]) -> Result<(), StoreError> {
        api::save_user_order(user_id.to_string(), updates.to_vec())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn delete_link(&self, link_id: &str) -> Result<(), StoreError> {
        api::delete_link(link_id.to_string())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn delete_social_media(&self, social_media_id: &str) -> Result<(), StoreError> {
        api::delete_social_media(social_media_id.to_string())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn create_link(
        &self,
        user_id: &str,
        name: &str,
        url: &str,
    ) -> Result<LinkRecord, StoreError> {
        api::create_link(user_id.to_string(), name.to_string(), url.to_string())
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn create_social_media(
        &self,
        user_id: &str,
        social_account_id: &str,
        username: &str,
    ) -> Result<SocialMediaRecord, StoreError> {
        api::create_social_media(
            user_id.to_string(),
            social_account_id.to_string(),
            username.to_string(),
        )
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
