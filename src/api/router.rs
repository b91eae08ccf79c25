//! Admin API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Admin routes are nested under `/api/admin/`, the health check under `/api/`.
//!
//! Middleware stack (outermost → innermost):
//! 1. Extension(AdminContext) → 2. Cache-Control → 3. Role guard → 4. Audit logger

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::AdminContext;
use crate::config::AppConfig;
use crate::db::UserStore;

/// Build the admin API router over any store.
pub fn admin_api_router<S: UserStore>(store: Arc<S>, config: Arc<AppConfig>) -> Router {
    build_router(AdminContext::new(store, config))
}

fn build_router<S: UserStore>(ctx: AdminContext<S>) -> Router {
    // Layers are applied from bottom (innermost) to top (outermost).
    // Extension must be outermost so the role guard can read AdminContext.
    let admin = Router::new()
        .route("/kpis/summary", get(endpoints::kpis::summary::<S>))
        .route("/kpis/roles", get(endpoints::kpis::roles::<S>))
        .route("/kpis/signups", get(endpoints::kpis::signups::<S>))
        .route("/directory", get(endpoints::directory::list::<S>))
        .route("/directory/export", get(endpoints::directory::export::<S>))
        .route("/users/:id", get(endpoints::users::detail::<S>))
        .with_state(ctx.clone())
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(axum::middleware::from_fn(middleware::auth::require_admin::<S>))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::Extension(ctx));

    let public = Router::new().route("/health", get(endpoints::health::check));

    Router::new()
        .nest("/api/admin", admin)
        .nest("/api", public)
}
