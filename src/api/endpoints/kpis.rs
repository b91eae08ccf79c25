//! Dashboard KPI endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::AdminContext;
use crate::config::MAX_SIGNUP_WINDOW_DAYS;
use crate::db::UserStore;
use crate::error::AdminError;
use crate::kpi;
use crate::models::{DailySignup, KpiSummary, RoleBreakdownEntry};

#[derive(Deserialize)]
pub struct SignupsQuery {
    pub days: Option<String>,
}

/// `GET /api/admin/kpis/summary`
pub async fn summary<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
) -> Result<Json<KpiSummary>, ApiError> {
    Ok(Json(kpi::get_summary(ctx.store.as_ref()).await?))
}

/// `GET /api/admin/kpis/roles`
pub async fn roles<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
) -> Result<Json<Vec<RoleBreakdownEntry>>, ApiError> {
    Ok(Json(kpi::get_role_breakdown(ctx.store.as_ref()).await?))
}

/// `GET /api/admin/kpis/signups?days=N`: N defaults to the configured window.
pub async fn signups<S: UserStore>(
    State(ctx): State<AdminContext<S>>,
    Query(query): Query<SignupsQuery>,
) -> Result<Json<Vec<DailySignup>>, ApiError> {
    let days = match query.days.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<u32>().map_err(|_| {
            AdminError::Validation(format!("days must be a non-negative integer, got {raw:?}"))
        })?,
        None => ctx.config.signup_window_days,
    };
    if days > MAX_SIGNUP_WINDOW_DAYS {
        return Err(AdminError::Validation(format!(
            "days must be at most {MAX_SIGNUP_WINDOW_DAYS}, got {days}"
        ))
        .into());
    }

    Ok(Json(kpi::get_daily_signups(ctx.store.as_ref(), Some(days)).await?))
}
