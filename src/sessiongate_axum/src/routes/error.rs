use axum::{Json, http::StatusCode, response::IntoResponse};
use sessiongate_application::SessionLoginError;
use thiserror::Error;

/// Errors that can occur while serving a route
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Session store unavailable: {0}")]
    SessionStore(String),
}

impl From<SessionLoginError> for RouteError {
    fn from(error: SessionLoginError) -> Self {
        match error {
            SessionLoginError::SessionStoreError(e) => RouteError::SessionStore(e.to_string()),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Request failed");

        let (status, message) = match self {
            RouteError::SessionStore(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
