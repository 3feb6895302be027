use std::sync::Arc;

use sessiongate_adapters::config::SessionSettings;
use sessiongate_application::{SessionLoginUseCase, SessionStatusUseCase};
use sessiongate_core::{CredentialVerifier, SessionId, SessionStore};

/// State for the login route.
pub struct LoginState<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub use_case: Arc<SessionLoginUseCase<S, V>>,
    pub session: Arc<SessionSettings>,
}

impl<S, V> LoginState<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    pub fn new(use_case: SessionLoginUseCase<S, V>, session: SessionSettings) -> Self {
        Self {
            use_case: Arc::new(use_case),
            session: Arc::new(session),
        }
    }
}

// Manual impl: a derive would require S and V to be Clone
impl<S, V> Clone for LoginState<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            session: Arc::clone(&self.session),
        }
    }
}

/// State for the session status route.
pub struct SessionStatusState<S>
where
    S: SessionStore,
{
    pub use_case: Arc<SessionStatusUseCase<S>>,
    pub session: Arc<SessionSettings>,
}

impl<S> SessionStatusState<S>
where
    S: SessionStore,
{
    pub fn new(use_case: SessionStatusUseCase<S>, session: SessionSettings) -> Self {
        Self {
            use_case: Arc::new(use_case),
            session: Arc::new(session),
        }
    }
}

impl<S> Clone for SessionStatusState<S>
where
    S: SessionStore,
{
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            session: Arc::clone(&self.session),
        }
    }
}

/// Read the session id out of the request cookies. Unparseable ids count as absent.
pub fn session_id_from_jar(
    jar: &axum_extra::extract::CookieJar,
    settings: &SessionSettings,
) -> Option<SessionId> {
    jar.get(&settings.cookie_name)
        .and_then(|cookie| SessionId::parse(cookie.value()))
}
