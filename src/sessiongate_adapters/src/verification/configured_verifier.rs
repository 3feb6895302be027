use std::time::Duration;

use reqwest::Client;
use sessiongate_core::{CredentialVerifier, Password, Username, VerifierError};
use thiserror::Error;

use crate::config::{VerifierBackend, VerifierSettings};

use super::{HttpCredentialVerifier, StaticCredentialVerifier};

#[derive(Debug, Error)]
pub enum VerifierSetupError {
    #[error("The http verifier needs verifier.base_url to be set")]
    MissingBaseUrl,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Credential verifier picked at startup from [`VerifierSettings`].
pub enum ConfiguredVerifier {
    Static(StaticCredentialVerifier),
    Http(HttpCredentialVerifier),
}

impl ConfiguredVerifier {
    pub fn from_settings(settings: &VerifierSettings) -> Result<Self, VerifierSetupError> {
        match settings.backend {
            VerifierBackend::Static => {
                if settings.accounts.is_empty() {
                    tracing::warn!("Static verifier configured without accounts; every login will fail");
                }
                Ok(Self::Static(StaticCredentialVerifier::new(
                    settings.accounts.clone(),
                )))
            }
            VerifierBackend::Http => {
                let base_url = settings
                    .base_url
                    .clone()
                    .ok_or(VerifierSetupError::MissingBaseUrl)?;

                // Slightly above the authenticator's own deadline so that one fires first
                let http_client = Client::builder()
                    .timeout(settings.timeout() + Duration::from_millis(100))
                    .build()?;

                Ok(Self::Http(HttpCredentialVerifier::new(
                    base_url,
                    settings.auth_token.clone(),
                    http_client,
                )))
            }
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for ConfiguredVerifier {
    async fn verify(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, VerifierError> {
        match self {
            Self::Static(verifier) => verifier.verify(username, password).await,
            Self::Http(verifier) => verifier.verify(username, password).await,
        }
    }
}
