use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::username::Username;

pub const VALID_KEY: &str = "valid";
pub const USERNAME_KEY: &str = "username";

/// Key-value state kept server-side for one client.
///
/// Values are arbitrary JSON so that keys written by other parts of an
/// application survive a round-trip through this crate untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionState(Map<String, Value>);

impl SessionState {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True only when `valid` holds the JSON boolean `true`.
    ///
    /// `"true"`, `1` and other truthy-looking values do not count.
    pub fn is_valid(&self) -> bool {
        matches!(self.0.get(VALID_KEY), Some(Value::Bool(true)))
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get(USERNAME_KEY).and_then(Value::as_str)
    }

    /// Record a successful login. `valid` is only ever set to `true` here.
    pub fn mark_authenticated(&mut self, username: &Username) {
        self.0.insert(VALID_KEY.to_string(), Value::Bool(true));
        self.0
            .insert(USERNAME_KEY.to_string(), Value::String(username.to_string()));
    }
}

impl From<Map<String, Value>> for SessionState {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
