//! Errors surfaced by the admin logic to its callers.
//!
//! Callers branch on [`AdminError::code`], never on the message.

use crate::db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A query against the store failed. `op` names the operation and
    /// sub-step, e.g. `summary.active`.
    #[error("{op}: {source}")]
    DataAccess {
        op: String,
        #[source]
        source: StoreError,
    },

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl AdminError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::DataAccess { .. } => "DATA_ACCESS",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Label a store failure with the operation it interrupted.
    pub fn data_access(op: impl Into<String>) -> impl FnOnce(StoreError) -> Self {
        let op = op.into();
        move |source| Self::DataAccess { op, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(AdminError::Validation("x".into()).code(), "VALIDATION");
        assert_eq!(AdminError::Forbidden("x".into()).code(), "FORBIDDEN");
        assert_eq!(AdminError::NotFound("x".into()).code(), "NOT_FOUND");
        assert_eq!(AdminError::Unknown("x".into()).code(), "UNKNOWN");
    }

    #[test]
    fn data_access_message_embeds_operation() {
        let err = AdminError::data_access("summary.total")(StoreError::LockPoisoned);
        assert_eq!(err.code(), "DATA_ACCESS");
        assert!(err.to_string().starts_with("summary.total: "));
        assert!(err.to_string().contains("lock poisoned"));
    }
}
