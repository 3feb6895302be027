use sessiongate_core::{SessionId, SessionStore};

use super::{login::SessionLoginError, session_authenticator::has_valid_session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated { username: String },
}

/// Reports whether the client's session is authenticated, without touching it.
pub struct SessionStatusUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> SessionStatusUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(name = "SessionStatusUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<SessionStatus, SessionLoginError> {
        let Some(id) = session_id else {
            return Ok(SessionStatus::Anonymous);
        };

        let session = self.session_store.load(&id).await?;
        if !has_valid_session(session.as_ref()) {
            return Ok(SessionStatus::Anonymous);
        }

        Ok(session
            .as_ref()
            .and_then(|session| session.username())
            .map(|username| SessionStatus::Authenticated {
                username: username.to_string(),
            })
            .unwrap_or(SessionStatus::Anonymous))
    }
}
