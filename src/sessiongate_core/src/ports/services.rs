use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, username::Username};

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("Credential verifier unavailable: {0}")]
    Unavailable(String),
}

/// Port trait for the external mechanism that checks a username/password pair.
///
/// `Ok(false)` means the credentials were looked at and refused. `Err` means
/// no answer could be obtained.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &Username, password: &Password)
    -> Result<bool, VerifierError>;
}
