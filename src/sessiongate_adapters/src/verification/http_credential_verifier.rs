use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use sessiongate_core::{CredentialVerifier, Password, Username, VerifierError};

/// Verifier that asks a directory service over HTTP.
///
/// Sends `POST {base_url}/verify` with a JSON body holding the username and
/// password. A 2xx answer accepts the credentials, 401 or 403 refuses them,
/// anything else means the directory could not answer.
pub struct HttpCredentialVerifier {
    http_client: Client,
    base_url: String,
    authorization_token: Option<Secret<String>>,
}

impl HttpCredentialVerifier {
    pub fn new(
        base_url: String,
        authorization_token: Option<Secret<String>>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for HttpCredentialVerifier {
    #[tracing::instrument(name = "Verifying credentials with directory", skip_all)]
    async fn verify(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, VerifierError> {
        // Appended, so a base path such as `/api/v1` is kept
        let url = format!("{}{VERIFY_PATH}", self.base_url.trim_end_matches('/'));

        let request_body = VerifyRequest {
            username: username.as_str(),
            password: password.as_ref().expose_secret(),
        };

        let mut request = self.http_client.post(url).json(&request_body);
        if let Some(token) = &self.authorization_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let status = request.send().await.map_err(unavailable)?.status();

        match status {
            s if s.is_success() => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            s => Err(VerifierError::Unavailable(format!(
                "directory answered with {s}"
            ))),
        }
    }
}

fn unavailable(e: impl std::fmt::Display) -> VerifierError {
    VerifierError::Unavailable(e.to_string())
}

const VERIFY_PATH: &str = "/verify";

#[derive(serde::Serialize)]
struct VerifyRequest<'a> {
    username: &'a str,
    password: &'a str,
}
