//! Single user lookup.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::AdminContext;
use crate::db::UserStore;
use crate::directory;
use crate::error::AdminError;
use crate::models::DirectoryRow;

/// `GET /api/admin/users/:id`
pub async fn detail<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
    Path(id): Path<String>,
) -> Result<Json<DirectoryRow>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AdminError::Validation(format!("invalid user id {id:?}")))?;
    Ok(Json(directory::get_user_row(ctx.store.as_ref(), &id).await?))
}
