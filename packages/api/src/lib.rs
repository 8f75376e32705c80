//! # API crate — shared fullstack server functions for LinkLeaf
//!
//! This crate is the backbone of the LinkLeaf fullstack architecture. It defines every
//! Dioxus server function that the web and desktop frontends call, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Local password authentication (Argon2) and session keys |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`User`, `OrderRow`) and client-safe projections (`UserInfo`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Accounts**: `get_current_user`, `register`, `activate_account`, `login_password`,
//!   `logout`, `username_available`
//! - **Profiles**: `get_profile` (owner only), `get_profile_by_username` (public bio)
//! - **Bio items**: `save_user_order`, `create_link`, `create_social_media`,
//!   `delete_link`, `delete_social_media`
//! - **Catalogs**: `list_social_accounts`, `list_themes`, `apply_theme`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use store::{LinkRecord, OrderUpdate, SocialMediaRecord, Theme, UserProfile};

/// A social provider from the catalog, offered when adding a social account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialAccountInfo {
    pub id: String,
    /// Display name, e.g. "Instagram".
    pub name: String,
    /// Profile URL prefix the sanitized handle is appended to.
    pub base_url: String,
}

/// Resolve the session to an authenticated user id.
#[cfg(feature = "server")]
async fn require_user(session: &tower_sessions::Session) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Assemble the full profile for a loaded user row: theme colors plus the
/// ordered item list with link and social media records joined in.
#[cfg(feature = "server")]
async fn load_profile(
    pool: &sqlx::PgPool,
    user: &models::User,
) -> Result<UserProfile, ServerFnError> {
    let theme = match user.theme_id {
        Some(theme_id) => {
            let row: Option<(uuid::Uuid, String, String)> =
                sqlx::query_as("SELECT id, background_color, text_color FROM themes WHERE id = $1")
                    .bind(theme_id)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| ServerFnError::new(e.to_string()))?;
            row.map(|(id, background_color, text_color)| Theme {
                id: id.to_string(),
                background_color,
                text_color,
            })
        }
        None => None,
    };

    let rows: Vec<models::OrderRow> = sqlx::query_as(
        "SELECT o.id, o.sequence, o.link_id, o.social_media_id,
                l.name AS link_name, l.url AS link_url,
                s.provider_name, s.url AS social_url, s.username AS social_username
         FROM orders o
         LEFT JOIN links l ON l.id = o.link_id
         LEFT JOIN social_media s ON s.id = o.social_media_id
         WHERE o.user_id = $1
         ORDER BY o.sequence",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(UserProfile {
        id: user.id.to_string(),
        username: user.username.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        avatar_url: user.avatar_url.clone(),
        status: user.status.clone(),
        theme,
        order: rows.iter().map(|r| r.to_entry()).collect(),
    })
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Check whether a bio username is still free to claim.
#[cfg(feature = "server")]
#[get("/api/users/available/:username")]
pub async fn username_available(username: String) -> Result<bool, ServerFnError> {
    use crate::db::get_pool;

    let username = username.trim().to_lowercase();
    if username.is_empty() {
        return Ok(false);
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(existing.is_none())
}

#[cfg(not(feature = "server"))]
#[get("/api/users/available/:username")]
pub async fn username_available(username: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new user. The account starts out "pending" with an activation
/// token; the activation link is currently delivered via the server log.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    username: String,
    name: String,
    email: String,
    phone: String,
    password: String,
    password_confirmation: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let username = username.trim().to_lowercase();
    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();
    let phone: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if username.is_empty()
        || !username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        return Err(ServerFnError::new(
            "Username may only contain lowercase letters, numbers, - and _",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if phone.is_empty() {
        return Err(ServerFnError::new("Phone is required"));
    }
    if password.len() < 6 {
        return Err(ServerFnError::new(
            "Password must be at least 6 characters",
        ));
    }
    if password != password_confirmation {
        return Err(ServerFnError::new("Passwords do not match"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let taken: Option<(i32,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if taken.is_some() {
        return Err(ServerFnError::new("This username is already taken"));
    }

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password)
        .map_err(|e| ServerFnError::new(e))?;

    let activation_token = uuid::Uuid::new_v4();

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (username, name, email, phone, password_hash, activation_token)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(&username)
    .bind(&name)
    .bind(&email)
    .bind(&phone)
    .bind(&password_hash)
    .bind(activation_token)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    // No mail transport yet; surface the activation link in the server log.
    tracing::info!(
        "activation link for {}: /activate/{}?token={}",
        user.username,
        user.id,
        activation_token
    );

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    username: String,
    name: String,
    email: String,
    phone: String,
    password: String,
    password_confirmation: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Redeem an activation token, flipping the account from "pending" to "active".
#[cfg(feature = "server")]
#[post("/api/auth/activate")]
pub async fn activate_account(user_id: String, token: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;
    let token_uuid =
        uuid::Uuid::parse_str(&token).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(
        "UPDATE users SET status = 'active', activation_token = NULL, updated_at = NOW()
         WHERE id = $1 AND activation_token = $2 AND status = 'pending'",
    )
    .bind(user_uuid)
    .bind(token_uuid)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        tracing::warn!("Activation rejected for user {}: token mismatch or already active", user_uuid);
        return Err(ServerFnError::new("Invalid or expired activation link"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/activate")]
pub async fn activate_account(user_id: String, token: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Get the full profile for the customize views. Owner only.
#[cfg(feature = "server")]
#[get("/api/user/:user_id", session: tower_sessions::Session)]
pub async fn get_profile(user_id: String) -> Result<UserProfile, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let auth_uuid = require_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if auth_uuid != user_uuid {
        return Err(ServerFnError::new("Not authorized"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("User not found"));
    };

    load_profile(pool, &user).await
}

#[cfg(not(feature = "server"))]
#[get("/api/user/:user_id")]
pub async fn get_profile(user_id: String) -> Result<UserProfile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the public bio for a claimed username. Returns `None` when unclaimed.
#[cfg(feature = "server")]
#[get("/api/bio/:username")]
pub async fn get_profile_by_username(
    username: String,
) -> Result<Option<UserProfile>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let username = username.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Ok(None);
    };

    Ok(Some(load_profile(pool, &user).await?))
}

#[cfg(not(feature = "server"))]
#[get("/api/bio/:username")]
pub async fn get_profile_by_username(
    username: String,
) -> Result<Option<UserProfile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Persist a reordering of the user's bio items. The whole payload is applied
/// in one transaction; an unknown or foreign entry rejects all of it.
#[cfg(feature = "server")]
#[post("/api/order/:user_id", session: tower_sessions::Session)]
pub async fn save_user_order(
    user_id: String,
    updates: Vec<OrderUpdate>,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if auth_uuid != user_uuid {
        return Err(ServerFnError::new("Not authorized"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    for update in &updates {
        let order_uuid = uuid::Uuid::parse_str(&update.order_id)
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let result = sqlx::query(
            "UPDATE orders SET sequence = $1, updated_at = NOW() WHERE id = $2 AND user_id = $3",
        )
        .bind(update.sequence)
        .bind(order_uuid)
        .bind(user_uuid)
        .execute(&mut *tx)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

        if result.rows_affected() != 1 {
            // Dropping the transaction rolls the earlier updates back
            tracing::warn!(
                "Order save for user {} aborted: entry {} no longer exists",
                user_uuid,
                update.order_id
            );
            return Err(ServerFnError::new("Order entry not found"));
        }
    }

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/order/:user_id")]
pub async fn save_user_order(
    user_id: String,
    updates: Vec<OrderUpdate>,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a free-form link and append it to the end of the bio.
#[cfg(feature = "server")]
#[post("/api/links", session: tower_sessions::Session)]
pub async fn create_link(
    user_id: String,
    name: String,
    url: String,
) -> Result<LinkRecord, ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if auth_uuid != user_uuid {
        return Err(ServerFnError::new("Not authorized"));
    }

    let name = name.trim().to_string();
    let url = url.trim().to_string();

    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if url.is_empty() {
        return Err(ServerFnError::new("URL is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (link_id,): (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO links (user_id, name, url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_uuid)
    .bind(&name)
    .bind(&url)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO orders (user_id, link_id, sequence)
         VALUES ($1, $2, (SELECT COALESCE(MAX(sequence), 0) + 1 FROM orders WHERE user_id = $1))",
    )
    .bind(user_uuid)
    .bind(link_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(LinkRecord {
        id: link_id.to_string(),
        name,
        url,
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/links")]
pub async fn create_link(
    user_id: String,
    name: String,
    url: String,
) -> Result<LinkRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a social media entry from a catalog provider and a raw handle,
/// appending it to the end of the bio. The handle is sanitized (pasted URLs,
/// `@` prefixes, phone formatting) before the profile URL is built.
#[cfg(feature = "server")]
#[post("/api/social-media", session: tower_sessions::Session)]
pub async fn create_social_media(
    user_id: String,
    social_account_id: String,
    username: String,
) -> Result<SocialMediaRecord, ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if auth_uuid != user_uuid {
        return Err(ServerFnError::new("Not authorized"));
    }

    let account_uuid = uuid::Uuid::parse_str(&social_account_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<(uuid::Uuid, String, String)> =
        sqlx::query_as("SELECT id, name, base_url FROM social_accounts WHERE id = $1")
            .bind(account_uuid)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((_, provider_name, base_url)) = account else {
        return Err(ServerFnError::new("Unknown social provider"));
    };

    let kind = store::ProviderKind::from_label(&provider_name);
    let handle = store::sanitize_handle(&username, kind);

    if handle.is_empty() {
        return Err(ServerFnError::new("Username is required"));
    }

    let url = format!("{}{}", base_url, handle);

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (social_id,): (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO social_media (user_id, social_account_id, provider_name, url, username)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(user_uuid)
    .bind(account_uuid)
    .bind(&provider_name)
    .bind(&url)
    .bind(&handle)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO orders (user_id, social_media_id, sequence)
         VALUES ($1, $2, (SELECT COALESCE(MAX(sequence), 0) + 1 FROM orders WHERE user_id = $1))",
    )
    .bind(user_uuid)
    .bind(social_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(SocialMediaRecord {
        id: social_id.to_string(),
        provider_name: Some(provider_name),
        url,
        username: Some(handle),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/social-media")]
pub async fn create_social_media(
    user_id: String,
    social_account_id: String,
    username: String,
) -> Result<SocialMediaRecord, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a free-form link. Its order entry goes with it, leaving a gap in
/// the remaining sequence numbers until the next reorder.
#[cfg(feature = "server")]
#[post("/api/links/:link_id/delete", session: tower_sessions::Session)]
pub async fn delete_link(link_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let link_uuid =
        uuid::Uuid::parse_str(&link_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
        .bind(link_uuid)
        .bind(auth_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Link not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/links/:link_id/delete")]
pub async fn delete_link(link_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a social media entry. Its order entry goes with it.
#[cfg(feature = "server")]
#[post("/api/social-media/:social_media_id/delete", session: tower_sessions::Session)]
pub async fn delete_social_media(social_media_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let social_uuid = uuid::Uuid::parse_str(&social_media_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query("DELETE FROM social_media WHERE id = $1 AND user_id = $2")
        .bind(social_uuid)
        .bind(auth_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Social media not found"));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/social-media/:social_media_id/delete")]
pub async fn delete_social_media(social_media_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the social provider catalog, paged.
#[cfg(feature = "server")]
#[get("/api/social-accounts")]
pub async fn list_social_accounts(
    page: u32,
    limit: u32,
) -> Result<Vec<SocialAccountInfo>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let limit = i64::from(limit.clamp(1, 100));
    let offset = i64::from(page.max(1) - 1) * limit;

    let rows: Vec<(uuid::Uuid, String, String)> = sqlx::query_as(
        "SELECT id, name, base_url FROM social_accounts ORDER BY name LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, name, base_url)| SocialAccountInfo {
            id: id.to_string(),
            name,
            base_url,
        })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/social-accounts")]
pub async fn list_social_accounts(
    page: u32,
    limit: u32,
) -> Result<Vec<SocialAccountInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the theme catalog, paged.
#[cfg(feature = "server")]
#[get("/api/themes")]
pub async fn list_themes(page: u32, limit: u32) -> Result<Vec<Theme>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let limit = i64::from(limit.clamp(1, 100));
    let offset = i64::from(page.max(1) - 1) * limit;

    let rows: Vec<(uuid::Uuid, String, String)> = sqlx::query_as(
        "SELECT id, background_color, text_color FROM themes ORDER BY created_at LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, background_color, text_color)| Theme {
            id: id.to_string(),
            background_color,
            text_color,
        })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/themes")]
pub async fn list_themes(page: u32, limit: u32) -> Result<Vec<Theme>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set the theme the user's public bio renders with.
#[cfg(feature = "server")]
#[post("/api/custom-theme", session: tower_sessions::Session)]
pub async fn apply_theme(user_id: String, theme_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let auth_uuid = require_user(&session).await?;

    let user_uuid =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if auth_uuid != user_uuid {
        return Err(ServerFnError::new("Not authorized"));
    }

    let theme_uuid =
        uuid::Uuid::parse_str(&theme_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let theme: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM themes WHERE id = $1")
        .bind(theme_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if theme.is_none() {
        return Err(ServerFnError::new("Theme not found"));
    }

    sqlx::query("UPDATE users SET theme_id = $1, updated_at = NOW() WHERE id = $2")
        .bind(theme_uuid)
        .bind(user_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/custom-theme")]
pub async fn apply_theme(user_id: String, theme_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
