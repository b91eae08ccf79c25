//! Audit logging middleware.
//!
//! Logs every admin request with actor, method, path, and response
//! status. Runs innermost (after auth has injected ActorContext).

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::api::types::ActorContext;

pub async fn log_access(
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let actor = req
        .extensions()
        .get::<ActorContext>()
        .map(|a| a.actor_id.to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let response = next.run(req).await;

    tracing::info!(
        actor,
        method,
        path,
        status = response.status().as_u16(),
        "admin api access"
    );

    response
}
