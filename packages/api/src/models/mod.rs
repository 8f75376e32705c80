//! Data models for the application.

#[cfg(feature = "server")]
mod profile;
mod user;

#[cfg(feature = "server")]
pub use profile::OrderRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
