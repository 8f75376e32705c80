//! # Database module — PostgreSQL connection pool
//!
//! The shared connection pool behind every server function in this crate,
//! gated with `#[cfg(feature = "server")]` so client (WASM) builds never
//! pull in SQLx.
//!
//! The pool is a lazy process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first [`get_pool`] call reads
//! `DATABASE_URL` (via `dotenvy`), opens a small pool, and every later
//! caller reuses it.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
