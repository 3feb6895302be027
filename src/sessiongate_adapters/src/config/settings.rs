use std::{collections::HashMap, time::Duration};

use axum::http::HeaderValue;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE, defaults, env, prod};

/// Settings for the whole service.
///
/// Resolved from, in increasing priority: built-in defaults, `config/base.json`
/// (optional) and `SESSIONGATE__*` environment variables, e.g.
/// `SESSIONGATE__SESSION__TTL_SECONDS=600`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionGateSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub store: StoreSettings,
    pub verifier: VerifierSettings,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub ttl_seconds: u64,
    pub secure_cookie: bool,
}

impl SessionSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub redis_host_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifierBackend {
    Static,
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifierSettings {
    pub backend: VerifierBackend,
    pub timeout_millis: u64,
    /// Username to password table for the `static` backend.
    #[serde(default)]
    pub accounts: HashMap<String, Secret<String>>,
    /// Base URL of the directory service for the `http` backend.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub auth_token: Option<Secret<String>>,
}

impl VerifierSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

impl SessionGateSettings {
    /// Load settings from `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load settings from a JSON document layered over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        // Redis refuses `SET EX 0`, and a zero TTL would expire every session at once
        if self.session.ttl_seconds == 0 {
            return Err(ConfigError::Message(
                "session.ttl_seconds must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("application.address", prod::APP_ADDRESS)?
        .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
        .set_default("session.ttl_seconds", defaults::SESSION_TTL_SECONDS as i64)?
        .set_default("session.secure_cookie", false)?
        .set_default("store.backend", "memory")?
        .set_default("store.redis_host_name", defaults::REDIS_HOST_NAME)?
        .set_default("verifier.backend", "static")?
        .set_default(
            "verifier.timeout_millis",
            defaults::VERIFIER_TIMEOUT_MILLIS as i64,
        )
}

/// Origins allowed to make credentialed cross-origin requests.
///
/// Accepts either a list or a single comma-separated string, so that it can
/// be set from one environment variable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "OriginList")]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OriginList {
    Joined(String),
    Listed(Vec<String>),
}

impl From<OriginList> for AllowedOrigins {
    fn from(list: OriginList) -> Self {
        let origins: Vec<String> = match list {
            OriginList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
            OriginList::Listed(listed) => listed,
        };

        Self(
            origins
                .iter()
                .map(|origin| origin.trim())
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect(),
        )
    }
}
