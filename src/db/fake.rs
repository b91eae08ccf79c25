//! In-memory [`UserStore`] for tests, with per-operation failure injection.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{StoreError, UserStore};
use crate::models::{CountFilter, Role};

#[derive(Default)]
pub struct FakeStore {
    pub roles: Vec<Role>,
    /// Canned answers for `count_users`, keyed by the exact filter.
    pub counts: Vec<(CountFilter, u64)>,
    pub created_at: Vec<DateTime<Utc>>,
    pub rpc_response: Option<serde_json::Value>,
    pub records: HashMap<Uuid, serde_json::Value>,
    pub actor_roles: HashMap<Uuid, String>,
    /// Count filters that fail instead of answering.
    pub failing_counts: Vec<CountFilter>,
    /// Role ids whose per-role count fails.
    pub failing_roles: HashSet<i64>,
    pub fail_all: bool,
    pub count_calls: AtomicUsize,
    pub last_rpc: Mutex<Option<(String, serde_json::Value)>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, filter: CountFilter, count: u64) -> Self {
        self.counts.push((filter, count));
        self
    }

    pub fn failing_count(mut self, filter: CountFilter) -> Self {
        self.failing_counts.push(filter);
        self
    }

    fn check(&self, what: &str) -> Result<(), StoreError> {
        if self.fail_all {
            return Err(StoreError::Unavailable(format!("{what}: injected failure")));
        }
        Ok(())
    }
}

impl UserStore for FakeStore {
    async fn count_users(&self, filter: &CountFilter) -> Result<u64, StoreError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.check("count_users")?;
        if self.failing_counts.contains(filter) {
            return Err(StoreError::Unavailable("count_users: injected failure".into()));
        }
        if let Some(role_id) = filter.role_id {
            if self.failing_roles.contains(&role_id) {
                return Err(StoreError::Unavailable(format!("role {role_id}: injected failure")));
            }
        }
        Ok(self
            .counts
            .iter()
            .find(|(f, _)| f == filter)
            .map(|(_, n)| *n)
            .unwrap_or(0))
    }

    async fn list_roles(&self) -> Result<Vec<Role>, StoreError> {
        self.check("list_roles")?;
        Ok(self.roles.clone())
    }

    async fn select_created_at(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, StoreError> {
        self.check("select_created_at")?;
        let mut out: Vec<_> = self
            .created_at
            .iter()
            .copied()
            .filter(|ts| *ts >= from && *ts <= to)
            .collect();
        out.sort();
        Ok(out)
    }

    async fn call_rpc(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> Result<serde_json::Value, StoreError> {
        self.check("call_rpc")?;
        if let Ok(mut last) = self.last_rpc.lock() {
            *last = Some((name.to_string(), params.clone()));
        }
        Ok(self
            .rpc_response
            .clone()
            .unwrap_or(serde_json::Value::Array(Vec::new())))
    }

    async fn find_user(&self, id: &Uuid) -> Result<Option<serde_json::Value>, StoreError> {
        self.check("find_user")?;
        Ok(self.records.get(id).cloned())
    }

    async fn find_role_name(&self, user_id: &Uuid) -> Result<Option<String>, StoreError> {
        self.check("find_role_name")?;
        Ok(self.actor_roles.get(user_id).cloned())
    }
}
