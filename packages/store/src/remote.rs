//! # ProfileStore — abstract backend for profile data
//!
//! The async interface the editor drives. Implementations live on either side
//! of the wire: [`crate::MemoryStore`] for tests and offline preview, and the
//! server-function adapter in the ui crate for production.
//!
//! | Method | Description |
//! |--------|-------------|
//! | `fetch_profile` | Load one user's full profile, order entries included. |
//! | `save_order` | Persist a reorder payload atomically; partial application is a contract violation. |
//! | `delete_link` / `delete_social_media` | Remove one record; its order entry goes with it, leaving a sequence gap. |
//! | `create_link` / `create_social_media` | Append a record at the end of the order. |
//!
//! [`submit_order`] and [`delete_item`] are the two coordinators built on top:
//! submit settles an optimistic [`ReorderTicket`](crate::board::ReorderTicket)
//! against a [`LinkBoard`], and delete dispatches an item to its type-specific
//! endpoint.

use thiserror::Error;

use crate::board::{LinkBoard, ReorderTicket};
use crate::items::{BioItem, ItemKind};
use crate::models::{LinkRecord, OrderUpdate, SocialMediaRecord, UserProfile};

/// Why a profile-store operation did not take effect. None of these are fatal:
/// the caller's last known state remains valid.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StoreError {
    /// The backend could not be reached or the call failed in transit.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the operation.
    #[error("rejected: {0}")]
    Rejected(String),
    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Async interface to a profile backend.
pub trait ProfileStore {
    fn fetch_profile(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<UserProfile, StoreError>>;
    fn save_order(
        &self,
        user_id: &str,
        updates: &[OrderUpdate],
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn delete_link(
        &self,
        link_id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn delete_social_media(
        &self,
        social_media_id: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn create_link(
        &self,
        user_id: &str,
        name: &str,
        url: &str,
    ) -> impl std::future::Future<Output = Result<LinkRecord, StoreError>>;
    fn create_social_media(
        &self,
        user_id: &str,
        social_account_id: &str,
        username: &str,
    ) -> impl std::future::Future<Output = Result<SocialMediaRecord, StoreError>>;
}

/// Submit a ticket's payload and settle the board with the outcome: confirm on
/// success, token-guarded rollback on failure. The error comes back to the
/// caller for logging; the board is already consistent either way.
pub async fn submit_order<S: ProfileStore>(
    store: &S,
    user_id: &str,
    board: &mut LinkBoard,
    ticket: ReorderTicket,
) -> Result<(), StoreError> {
    match store.save_order(user_id, ticket.updates()).await {
        Ok(()) => {
            board.confirm(&ticket);
            Ok(())
        }
        Err(err) => {
            board.rollback(ticket);
            Err(err)
        }
    }
}

/// Delete an item through the endpoint matching its kind.
///
/// Nothing is removed locally; on success the caller refetches the profile so
/// the list reflects the server's state, sequence gaps included.
pub async fn delete_item<S: ProfileStore>(store: &S, item: &BioItem) -> Result<(), StoreError> {
    match item.kind {
        ItemKind::Social => store.delete_social_media(&item.id).await,
        ItemKind::Link => store.delete_link(&item.id).await,
    }
}
