use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use sessiongate_core::{
    CredentialVerifier, Credentials, Password, SessionId, SessionState, SessionStore,
    SessionStoreError, Username, VerifierError,
};
use tokio::sync::RwLock;

/// How the mock verifier answers every call.
#[derive(Clone, Copy)]
pub enum Answer {
    Accept,
    Refuse,
    Fail,
    Hang,
}

#[derive(Clone)]
pub struct MockVerifier {
    answer: Answer,
    calls: Arc<AtomicUsize>,
}

impl MockVerifier {
    pub fn new(answer: Answer) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for MockVerifier {
    async fn verify(
        &self,
        _username: &Username,
        _password: &Password,
    ) -> Result<bool, VerifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            Answer::Accept => Ok(true),
            Answer::Refuse => Ok(false),
            Answer::Fail => Err(VerifierError::Unavailable("connection refused".to_string())),
            Answer::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(true)
            }
        }
    }
}

/// Verifier that accepts exactly one username/password pair.
#[derive(Clone)]
pub struct SingleAccountVerifier {
    pub username: String,
    pub password: String,
}

#[async_trait::async_trait]
impl CredentialVerifier for SingleAccountVerifier {
    async fn verify(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, VerifierError> {
        Ok(username.as_str() == self.username
            && password.as_ref().expose_secret() == &self.password)
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionState>>>,
    saves: Arc<AtomicUsize>,
}

impl MockSessionStore {
    pub async fn insert(&self, id: SessionId, session: SessionState) {
        self.sessions.write().await.insert(id, session);
    }

    pub async fn get(&self, id: &SessionId) -> Option<SessionState> {
        self.sessions.read().await.get(id).cloned()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save(&self, id: &SessionId, session: SessionState) -> Result<(), SessionStoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.sessions.write().await.insert(id.clone(), session);
        Ok(())
    }
}

/// Store whose backend is always down.
#[derive(Clone)]
pub struct BrokenSessionStore;

#[async_trait::async_trait]
impl SessionStore for BrokenSessionStore {
    async fn load(&self, _id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("store offline".to_string()))
    }

    async fn save(&self, _id: &SessionId, _session: SessionState) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("store offline".to_string()))
    }
}

pub fn credentials(username: &str, password: &str) -> Credentials {
    Credentials::new(
        Username::try_from(username).unwrap(),
        Password::from(Secret::new(password.to_string())),
    )
}

pub fn authenticated_session(username: &str) -> SessionState {
    let mut session = SessionState::new();
    session.mark_authenticated(&Username::try_from(username).unwrap());
    session
}
