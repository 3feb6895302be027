use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use sessiongate_core::{SessionId, SessionState, SessionStore, SessionStoreError};

#[derive(Debug, Clone)]
struct StoredSession {
    session: SessionState,
    saved_at: Instant,
}

/// In-process session store. Sessions older than the ttl read as absent.
#[derive(Debug, Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    ttl: Option<Duration>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    fn is_expired(&self, stored: &StoredSession) -> bool {
        self.ttl
            .is_some_and(|ttl| stored.saved_at.elapsed() >= ttl)
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(id)
            .filter(|stored| !self.is_expired(stored))
            .map(|stored| stored.session.clone()))
    }

    async fn save(&self, id: &SessionId, session: SessionState) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, stored| !self.is_expired(stored));
        sessions.insert(
            id.clone(),
            StoredSession {
                session,
                saved_at: Instant::now(),
            },
        );
        Ok(())
    }
}
