use chrono::{DateTime, Utc};

use super::enums::{RecencyBucket, Sex, UserStatus};

/// Admin directory filter, built per request from UI state.
///
/// `order` stays a raw token: unrecognized values fall back to the
/// remote default ordering instead of failing the request.
#[derive(Debug, Default, Clone)]
pub struct DirectoryFilter {
    pub q: Option<String>,
    pub role: Option<String>,
    pub sex: Option<Sex>,
    pub status: Option<UserStatus>,
    pub recency: Option<RecencyBucket>,
    pub order: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Predicate for a user count query. Unset fields do not constrain.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountFilter {
    pub status: Option<UserStatus>,
    pub role_id: Option<i64>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl CountFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: UserStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_role(role_id: i64) -> Self {
        Self {
            role_id: Some(role_id),
            ..Self::default()
        }
    }

    pub fn created_since(from: DateTime<Utc>) -> Self {
        Self {
            created_from: Some(from),
            ..Self::default()
        }
    }
}
