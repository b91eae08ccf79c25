//! Shared types for the admin API layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::UserStore;

/// Header carrying the already-authenticated actor's user id.
pub const ACTOR_HEADER: &str = "X-Actor-Id";

/// Shared context for all API routes and middleware.
pub struct AdminContext<S> {
    pub store: Arc<S>,
    pub config: Arc<AppConfig>,
}

impl<S: UserStore> AdminContext<S> {
    pub fn new(store: Arc<S>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AdminContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

/// Actor that passed the admin role check, injected into request
/// extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub actor_id: Uuid,
}
