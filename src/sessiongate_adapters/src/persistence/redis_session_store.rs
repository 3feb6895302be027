use std::sync::Arc;

use redis::{Commands, Connection};
use sessiongate_core::{SessionId, SessionState, SessionStore, SessionStoreError};
use tokio::sync::RwLock;

/// Session store backed by Redis. Each session is a JSON string that expires
/// `session_ttl` seconds after it was last saved.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        let key = get_key(id);

        let mut conn = self.conn.write().await;
        let stored: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        stored
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| SessionStoreError::Corrupted(e.to_string()))
            })
            .transpose()
    }

    async fn save(&self, id: &SessionId, session: SessionState) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let json = serde_json::to_string(&session)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        let mut conn = self.conn.write().await;
        conn.set_ex(key, json, self.session_ttl)
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))
    }
}

// Prefix keeps session keys apart from anything else in the same database
const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, id)
}
