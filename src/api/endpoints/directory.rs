//! Directory listing and CSV export endpoints.

use std::str::FromStr;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::AdminContext;
use crate::db::UserStore;
use crate::directory;
use crate::error::AdminError;
use crate::models::enums::{RecencyBucket, UserStatus};
use crate::models::{DirectoryFilter, DirectoryRow};
use crate::validation::parse_sex;

/// Raw query string. Everything arrives as text so malformed values
/// surface as `VALIDATION` errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
    pub role: Option<String>,
    pub sex: Option<String>,
    pub status: Option<String>,
    pub recency: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl TryFrom<DirectoryQuery> for DirectoryFilter {
    type Error = AdminError;

    fn try_from(query: DirectoryQuery) -> Result<Self, Self::Error> {
        Ok(DirectoryFilter {
            q: query.q,
            role: query.role,
            sex: present(query.sex.as_deref()).map(parse_sex).transpose()?,
            status: parse_token::<UserStatus>("status", query.status.as_deref())?,
            recency: parse_token::<RecencyBucket>("recency", query.recency.as_deref())?,
            order: query.order,
            limit: parse_number("limit", query.limit.as_deref())?,
            offset: parse_number("offset", query.offset.as_deref())?,
        })
    }
}

/// Empty form fields count as unset.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_token<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Option<T>, AdminError> {
    present(raw)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| AdminError::Validation(format!("unknown {field} {v:?}")))
        })
        .transpose()
}

fn parse_number(field: &str, raw: Option<&str>) -> Result<Option<u32>, AdminError> {
    present(raw)
        .map(|v| {
            v.parse::<u32>().map_err(|_| {
                AdminError::Validation(format!("{field} must be a non-negative integer, got {v:?}"))
            })
        })
        .transpose()
}

/// `GET /api/admin/directory`
pub async fn list<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<Vec<DirectoryRow>>, ApiError> {
    let filter = DirectoryFilter::try_from(query)?;
    Ok(Json(directory::list_directory(ctx.store.as_ref(), &filter).await?))
}

/// `GET /api/admin/directory/export`: same filter, CSV body.
pub async fn export<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
    Query(query): Query<DirectoryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = DirectoryFilter::try_from(query)?;
    let rows = directory::list_directory(ctx.store.as_ref(), &filter).await?;
    let body = directory::export_directory_csv(&rows);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"directorio.csv\""),
        ],
        body,
    ))
}
