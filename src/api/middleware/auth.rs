//! Admin role middleware.
//!
//! Reads `X-Actor-Id`, asserts the configured admin role against the
//! store, and injects `ActorContext` for downstream handlers.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ActorContext, AdminContext, ACTOR_HEADER};
use crate::authorization::assert_role;
use crate::db::UserStore;

/// Require an actor holding the admin role.
///
/// Accesses `AdminContext` from request extensions (injected by Extension layer).
pub async fn require_admin<S: UserStore>(
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    match require_admin_inner::<S>(req, next).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn require_admin_inner<S: UserStore>(
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx: AdminContext<S> = req
        .extensions()
        .get::<AdminContext<S>>()
        .cloned()
        .ok_or(ApiError::Internal("missing admin context".into()))?;

    let actor_id = req
        .headers()
        .get(ACTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or(ApiError::Unauthorized)?;

    assert_role(ctx.store.as_ref(), &actor_id, &ctx.config.admin_role).await?;

    req.extensions_mut().insert(ActorContext { actor_id });

    Ok(next.run(req).await)
}
