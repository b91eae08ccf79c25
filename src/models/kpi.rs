use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-of-dashboard user counts. Fields are independent: users with an
/// unknown status count toward `total_users` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_users: u64,
    pub active_users: u64,
    pub inactive_users: u64,
    pub new_users_last_7d: u64,
    pub new_users_last_30d: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBreakdownEntry {
    pub role_id: i64,
    pub role_name: String,
    pub count: u64,
}

/// One point of the signup chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySignup {
    pub day: NaiveDate,
    pub count: u64,
}
