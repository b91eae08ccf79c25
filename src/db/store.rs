//! SQLite-backed [`UserStore`].
//!
//! Stands in for the hosted backend: counts and selects run as plain SQL,
//! procedures are dispatched by name to repository functions.

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use super::repository;
use super::sqlite::{open_database, open_memory_database};
use super::{StoreError, UserStore, DIRECTORY_RPC};
use crate::models::{CountFilter, DirectoryRpcParams, Role, User};

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(open_database(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(open_memory_database()?))
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }

    pub fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        self.with_conn(|conn| repository::insert_user(conn, user))
    }
}

impl UserStore for SqliteStore {
    async fn count_users(&self, filter: &CountFilter) -> Result<u64, StoreError> {
        self.with_conn(|conn| repository::count_users(conn, filter))
    }

    async fn list_roles(&self) -> Result<Vec<Role>, StoreError> {
        self.with_conn(repository::list_roles)
    }

    async fn select_created_at(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, StoreError> {
        self.with_conn(|conn| repository::select_created_at(conn, &from, &to))
    }

    async fn call_rpc(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> Result<serde_json::Value, StoreError> {
        match name {
            DIRECTORY_RPC => {
                let params: DirectoryRpcParams = serde_json::from_value(params.clone())?;
                let rows = self.with_conn(|conn| repository::list_directory(conn, &params))?;
                Ok(serde_json::Value::Array(rows))
            }
            other => Err(StoreError::UnknownProcedure(other.to_string())),
        }
    }

    async fn find_user(&self, id: &Uuid) -> Result<Option<serde_json::Value>, StoreError> {
        self.with_conn(|conn| repository::find_directory_record(conn, id))
    }

    async fn find_role_name(&self, user_id: &Uuid) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| repository::find_role_name(conn, user_id))
    }
}
