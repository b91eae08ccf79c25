use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::enums::{Sex, UserStatus};

/// A row of the `users` table as written by the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identifier: Option<String>,
    pub sex: Option<Sex>,
    pub status: Option<UserStatus>,
    pub role_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Minimal user created at `created_at`, everything else unset.
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: None,
            email: None,
            phone: None,
            identifier: None,
            sex: None,
            status: None,
            role_id: None,
            created_at,
            last_login_at: None,
        }
    }
}
