use std::time::Duration;

use sessiongate_core::{
    CredentialVerifier, Credentials, LoginResult, RejectionReason, SessionState, VerifierError,
};

/// Result of [`SessionAuthenticator::process_login`]: the outcome and the
/// session as it stands afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginTransition {
    pub result: LoginResult,
    pub session: Option<SessionState>,
}

/// True only if a session exists and its `valid` entry is boolean `true`.
pub fn has_valid_session(session: Option<&SessionState>) -> bool {
    session.is_some_and(SessionState::is_valid)
}

/// Decides and applies the login state transition for one request.
///
/// Construction has no side effects; nothing happens until
/// [`process_login`](Self::process_login) is called.
#[derive(Clone)]
pub struct SessionAuthenticator<V>
where
    V: CredentialVerifier,
{
    verifier: V,
    verifier_timeout: Option<Duration>,
}

impl<V> SessionAuthenticator<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            verifier_timeout: None,
        }
    }

    /// Bound every verifier call. A call that runs past the deadline is
    /// reported as `Rejected(VerifierUnavailable)`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.verifier_timeout = Some(timeout);
        self
    }

    pub fn has_valid_session(session: Option<&SessionState>) -> bool {
        has_valid_session(session)
    }

    /// Run the login flow against `session`.
    ///
    /// # Arguments
    /// * `session` - Current session state, `None` if the client has none yet
    /// * `credentials` - Submitted credentials, `None` if nothing usable was submitted
    ///
    /// # Returns
    /// The login result together with the session after the call. The session
    /// is only ever modified on `Authenticated`.
    #[tracing::instrument(name = "SessionAuthenticator::process_login", skip_all)]
    pub async fn process_login(
        &self,
        session: Option<SessionState>,
        credentials: Option<Credentials>,
    ) -> LoginTransition {
        if Self::has_valid_session(session.as_ref()) {
            return LoginTransition {
                result: LoginResult::AlreadyAuthenticated,
                session,
            };
        }

        let Some(credentials) = credentials else {
            return LoginTransition {
                result: LoginResult::NoOp,
                session,
            };
        };

        let result = match self.verify(&credentials).await {
            Ok(true) => {
                let mut session = session.unwrap_or_default();
                session.mark_authenticated(credentials.username());
                tracing::info!(username = %credentials.username(), "Session authenticated");
                return LoginTransition {
                    result: LoginResult::Authenticated,
                    session: Some(session),
                };
            }
            Ok(false) => {
                tracing::info!(username = %credentials.username(), "Credentials rejected");
                LoginResult::Rejected(RejectionReason::VerificationFailed)
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username(), error = %e, "Verifier unavailable");
                LoginResult::Rejected(RejectionReason::VerifierUnavailable)
            }
        };

        LoginTransition { result, session }
    }

    async fn verify(&self, credentials: &Credentials) -> Result<bool, VerifierError> {
        let verification = self
            .verifier
            .verify(credentials.username(), credentials.password());

        match self.verifier_timeout {
            Some(timeout) => tokio::time::timeout(timeout, verification)
                .await
                .map_err(|_| {
                    VerifierError::Unavailable(format!("no answer within {timeout:?}"))
                })?,
            None => verification.await,
        }
    }
}
