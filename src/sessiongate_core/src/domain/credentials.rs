use secrecy::Secret;
use serde::Deserialize;

use super::{password::Password, username::Username};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("Username contains invalid characters")]
    InvalidUsername,
}

/// A username/password pair ready to be handed to a verifier.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Raw login form fields as submitted by the client.
///
/// Every field is optional: a request that is not a login submission simply
/// carries none of them.
#[derive(Debug, Default, Deserialize)]
pub struct SubmittedForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl SubmittedForm {
    /// Turn the submission into credentials.
    ///
    /// Missing fields and usernames that fail validation count as "nothing
    /// submitted" rather than as an error. An empty password is still passed
    /// on; the verifier decides what it means.
    pub fn into_credentials(self) -> Option<Credentials> {
        let username = Username::try_from(self.username?).ok()?;
        let password = Password::from(self.password?);
        Some(Credentials::new(username, password))
    }
}
