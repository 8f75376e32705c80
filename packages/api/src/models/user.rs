//! # User model
//!
//! Two representations of a LinkLeaf user:
//!
//! - [`User`] (server only) is the full `users` row, including the Argon2
//!   `password_hash`, the `activation_token` consumed by account activation,
//!   and the `theme_id` the public bio renders with. It derives
//!   [`sqlx::FromRow`] so queries can load it directly.
//! - [`UserInfo`] is the client-safe projection that crosses the server
//!   function boundary: no hash, no token, and the `Uuid` flattened to a
//!   `String` so it deserializes in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    /// "pending" until the activation token is redeemed, then "active".
    pub status: String,
    pub role: String,
    pub password_hash: Option<String>,
    pub activation_token: Option<Uuid>,
    pub theme_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar_url: self.avatar_url.clone(),
            status: self.status.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
    pub status: String,
}

impl UserInfo {
    /// Get display name, falling back to the claimed username.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}
