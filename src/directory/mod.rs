//! Admin user directory: filter → procedure parameters → typed rows.

pub mod export;
pub mod params;
pub mod rows;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::{UserStore, DIRECTORY_RPC};
use crate::error::AdminError;
use crate::models::{DirectoryFilter, DirectoryRow};

pub use export::export_directory_csv;
pub use params::build_rpc_params;
pub use rows::{in_recency_bucket, map_directory_row, parse_directory_rows};

/// Directory rows for `filter`, as of now.
pub async fn list_directory<S: UserStore>(
    store: &S,
    filter: &DirectoryFilter,
) -> Result<Vec<DirectoryRow>, AdminError> {
    list_directory_at(store, filter, Utc::now()).await
}

/// Directory rows for `filter`. The recency bucket is applied here,
/// after the procedure returns, relative to `now`.
pub async fn list_directory_at<S: UserStore>(
    store: &S,
    filter: &DirectoryFilter,
    now: DateTime<Utc>,
) -> Result<Vec<DirectoryRow>, AdminError> {
    let params = serde_json::to_value(build_rpc_params(filter))
        .map_err(|e| AdminError::Unknown(format!("directory params: {e}")))?;

    let response = store
        .call_rpc(DIRECTORY_RPC, &params)
        .await
        .map_err(AdminError::data_access("directory.rpc"))?;

    let mut rows = parse_directory_rows(&response)?;
    if let Some(bucket) = filter.recency {
        rows.retain(|row| in_recency_bucket(row, bucket, now));
    }

    tracing::debug!(rows = rows.len(), "directory listed");
    Ok(rows)
}

/// One user's directory row.
pub async fn get_user_row<S: UserStore>(store: &S, id: &Uuid) -> Result<DirectoryRow, AdminError> {
    let record = store
        .find_user(id)
        .await
        .map_err(AdminError::data_access("directory.find_user"))?
        .ok_or_else(|| AdminError::NotFound(format!("user {id}")))?;
    Ok(map_directory_row(&record))
}
