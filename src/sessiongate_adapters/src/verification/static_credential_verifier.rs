use std::collections::HashMap;
use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use sessiongate_core::{CredentialVerifier, Password, Username, VerifierError};

/// Verifier backed by a fixed username/password table.
///
/// Meant for development and tests; production deployments point the service
/// at a real directory with [`HttpCredentialVerifier`](super::HttpCredentialVerifier).
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialVerifier {
    accounts: Arc<HashMap<String, Secret<String>>>,
}

impl StaticCredentialVerifier {
    pub fn new(accounts: HashMap<String, Secret<String>>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }

    pub fn with_account(username: &str, password: &str) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(username.to_string(), Secret::new(password.to_string()));
        Self::new(accounts)
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, VerifierError> {
        Ok(self
            .accounts
            .get(username.as_str())
            .is_some_and(|expected| {
                expected.expose_secret() == password.as_ref().expose_secret()
            }))
    }
}
