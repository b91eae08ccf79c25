//! Role guard for privileged operations.
//!
//! The actor's role is looked up on every call; nothing is cached.
//! Default-deny: an unknown actor or an actor without a role is forbidden.

use std::future::Future;

use uuid::Uuid;

use crate::db::UserStore;
use crate::error::AdminError;

/// Fail with `FORBIDDEN` unless the actor's role name is exactly `required`.
pub async fn assert_role<S: UserStore>(
    store: &S,
    actor_id: &Uuid,
    required: &str,
) -> Result<(), AdminError> {
    let role = store
        .find_role_name(actor_id)
        .await
        .map_err(AdminError::data_access("assert_role.lookup"))?;

    match role {
        Some(name) if name == required => Ok(()),
        Some(name) => {
            tracing::warn!(%actor_id, role = %name, required, "role assertion failed");
            Err(AdminError::Forbidden(format!(
                "role {name:?} cannot perform this action"
            )))
        }
        None => {
            tracing::warn!(%actor_id, required, "role assertion failed: no role");
            Err(AdminError::Forbidden("actor has no role".into()))
        }
    }
}

/// Run `action` only once `actor_id` holds `required`.
pub async fn guarded<S, F, Fut, T>(
    store: &S,
    actor_id: &Uuid,
    required: &str,
    action: F,
) -> Result<T, AdminError>
where
    S: UserStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, AdminError>>,
{
    assert_role(store, actor_id, required).await?;
    action().await
}
