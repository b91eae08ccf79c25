use serde::{Deserialize, Serialize};

/// Normalized directory projection of a user record.
///
/// Every field is always serialized; absent upstream values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryRow {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identifier: Option<String>,
    pub sex: Option<String>,
    pub status: Option<String>,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
    pub created_at: Option<String>,
    pub last_login_at: Option<String>,
}

/// Named parameters for the `admin_list_users` procedure.
///
/// Absent values are sent as `null`, leaving the choice to the procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRpcParams {
    pub q: Option<String>,
    pub role: Option<String>,
    pub sex: Option<String>,
    pub status: Option<String>,
    pub order: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
