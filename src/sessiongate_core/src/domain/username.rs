use std::fmt;

use serde::Serialize;

use super::credentials::CredentialsError;

/// Login name submitted by a client. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = CredentialsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }
        if value.chars().any(char::is_control) {
            return Err(CredentialsError::InvalidUsername);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Username {
    type Error = CredentialsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
