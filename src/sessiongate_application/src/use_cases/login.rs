use sessiongate_core::{
    CredentialVerifier, Credentials, LoginResult, SessionId, SessionStore, SessionStoreError,
};

use super::session_authenticator::SessionAuthenticator;

/// Response from the session login use case
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLoginResponse {
    pub result: LoginResult,
    /// Id the session lives under after the call. A successful login always
    /// moves the session to a freshly generated id.
    pub session_id: Option<SessionId>,
    /// Authenticated username, set for `Authenticated` and `AlreadyAuthenticated`.
    pub username: Option<String>,
}

/// Error types specific to the session login use case
#[derive(Debug, thiserror::Error)]
pub enum SessionLoginError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Login use case - loads the client's session, runs the authenticator on it
/// and persists the session if it became valid.
pub struct SessionLoginUseCase<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    session_store: S,
    authenticator: SessionAuthenticator<V>,
}

impl<S, V> SessionLoginUseCase<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub fn new(session_store: S, authenticator: SessionAuthenticator<V>) -> Self {
        Self {
            session_store,
            authenticator,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `session_id` - Id from the client's session cookie, if any
    /// * `credentials` - Submitted credentials, if any
    ///
    /// # Returns
    /// The login result, plus the session id and username when the session is valid
    #[tracing::instrument(name = "SessionLoginUseCase::execute", skip(self, credentials))]
    pub async fn execute(
        &self,
        session_id: Option<SessionId>,
        credentials: Option<Credentials>,
    ) -> Result<SessionLoginResponse, SessionLoginError> {
        let session = match &session_id {
            Some(id) => self.session_store.load(id).await?,
            None => None,
        };

        let transition = self.authenticator.process_login(session, credentials).await;

        let username = transition
            .session
            .as_ref()
            .filter(|_| transition.result.is_authenticated())
            .and_then(|session| session.username())
            .map(str::to_string);

        // Only a fresh authentication changes the session; nothing else is written back.
        // The id presented by the client is never promoted to an authenticated one.
        let session_id = match (transition.result, transition.session) {
            (LoginResult::Authenticated, Some(session)) => {
                let id = SessionId::new();
                self.session_store.save(&id, session).await?;
                tracing::debug!(session_id = %id, "Issued session id");
                Some(id)
            }
            _ => session_id,
        };

        Ok(SessionLoginResponse {
            result: transition.result,
            session_id,
            username,
        })
    }
}
