use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{session_id::SessionId, session_state::SessionState};

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Failed to decode stored session: {0}")]
    Corrupted(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Corrupted(_), Self::Corrupted(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Server-side storage of session state keyed by session id.
///
/// Expiry and destruction are the store's own business.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError>;
    async fn save(&self, id: &SessionId, session: SessionState) -> Result<(), SessionStoreError>;
}
