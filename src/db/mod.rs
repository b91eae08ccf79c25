//! Data access for the admin back office.
//!
//! Aggregators and the directory never talk to SQLite directly: they take
//! any [`UserStore`], which the binary backs with [`SqliteStore`] and tests
//! back with an in-memory fake.

pub mod repository;
pub mod sqlite;
pub mod store;

#[cfg(test)]
pub mod fake;

use std::future::Future;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CountFilter, Role};

pub use sqlite::*;
pub use store::SqliteStore;

/// Procedure backing the admin directory listing.
pub const DIRECTORY_RPC: &str = "admin_list_users";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Unknown procedure: {0}")]
    UnknownProcedure(String),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Connection lock poisoned")]
    LockPoisoned,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Operations the admin logic consumes from the user-records backend.
///
/// Futures are `Send` so callers can run them from axum handlers on the
/// multi-threaded runtime.
pub trait UserStore: Send + Sync + 'static {
    /// Count users matching `filter`.
    fn count_users(
        &self,
        filter: &CountFilter,
    ) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// All known roles, ordered by name ascending.
    fn list_roles(&self) -> impl Future<Output = Result<Vec<Role>, StoreError>> + Send;

    /// Creation timestamps in `[from, to]`, oldest first.
    fn select_created_at(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<DateTime<Utc>>, StoreError>> + Send;

    /// Invoke a named procedure with a JSON object of named parameters.
    fn call_rpc(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, StoreError>> + Send;

    /// Raw directory record for one user, `None` when the id is unknown.
    fn find_user(
        &self,
        id: &Uuid,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;

    /// Role name of a user. `Ok(None)` when the user is unknown or has no role.
    fn find_role_name(
        &self,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
}
