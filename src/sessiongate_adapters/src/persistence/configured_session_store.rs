use std::sync::Arc;

use sessiongate_core::{SessionId, SessionState, SessionStore, SessionStoreError};
use tokio::sync::RwLock;

use crate::config::{SessionGateSettings, StoreBackend};

use super::{HashMapSessionStore, RedisSessionStore};

/// Session store picked at startup from [`SessionGateSettings`].
#[derive(Clone)]
pub enum ConfiguredSessionStore {
    Memory(HashMapSessionStore),
    Redis(RedisSessionStore),
}

impl ConfiguredSessionStore {
    /// Build the configured store, connecting to Redis if that is the backend.
    pub fn from_settings(settings: &SessionGateSettings) -> redis::RedisResult<Self> {
        match settings.store.backend {
            StoreBackend::Memory => Ok(Self::Memory(
                HashMapSessionStore::new().with_ttl(settings.session.ttl()),
            )),
            StoreBackend::Redis => {
                let client = get_redis_client(&settings.store.redis_host_name)?;
                let conn = Arc::new(RwLock::new(client.get_connection()?));
                Ok(Self::Redis(RedisSessionStore::new(
                    conn,
                    settings.session.ttl_seconds,
                )))
            }
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for ConfiguredSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        match self {
            Self::Memory(store) => store.load(id).await,
            Self::Redis(store) => store.load(id).await,
        }
    }

    async fn save(&self, id: &SessionId, session: SessionState) -> Result<(), SessionStoreError> {
        match self {
            Self::Memory(store) => store.save(id, session).await,
            Self::Redis(store) => store.save(id, session).await,
        }
    }
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname
pub fn get_redis_client(redis_hostname: &str) -> redis::RedisResult<redis::Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_by_default() {
        let settings = SessionGateSettings::from_json("{}").unwrap();
        let store = ConfiguredSessionStore::from_settings(&settings).unwrap();
        assert!(matches!(store, ConfiguredSessionStore::Memory(_)));

        let id = SessionId::new();
        store.save(&id, SessionState::new()).await.unwrap();
        assert_eq!(store.load(&id).await, Ok(Some(SessionState::new())));
    }
}
