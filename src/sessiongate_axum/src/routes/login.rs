//! Axum-specific login route.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use sessiongate_adapters::handlers;
use sessiongate_core::{CredentialVerifier, SessionStore, SubmittedForm};

use super::error::RouteError;
use crate::{
    adapters::response_builder,
    state::{LoginState, session_id_from_jar},
};

/// Axum login route.
///
/// A body that is missing or cannot be parsed as a form counts as "nothing
/// submitted" and ends in a 204, the same as an empty form.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, V>(
    State(state): State<LoginState<S, V>>,
    jar: CookieJar,
    form: Result<Form<SubmittedForm>, FormRejection>,
) -> Result<impl IntoResponse, RouteError>
where
    S: SessionStore + 'static,
    V: CredentialVerifier + 'static,
{
    let session_id = session_id_from_jar(&jar, &state.session);
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let response = handlers::handle_login(
        &*state.use_case,
        session_id,
        form,
        &*state.session,
        response_builder(),
    )
    .await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        routing::post,
    };
    use sessiongate_adapters::{
        config::SessionSettings, persistence::HashMapSessionStore,
        verification::StaticCredentialVerifier,
    };
    use sessiongate_application::{SessionAuthenticator, SessionLoginUseCase};
    use tower::ServiceExt;

    fn app() -> Router {
        let use_case = SessionLoginUseCase::new(
            HashMapSessionStore::new(),
            SessionAuthenticator::new(StaticCredentialVerifier::with_account("alice", "wonderland")),
        );
        let settings = SessionSettings {
            cookie_name: "session_id".to_string(),
            ttl_seconds: 60,
            secure_cookie: false,
        };

        Router::new()
            .route(
                "/login",
                post(login::<HashMapSessionStore, StaticCredentialVerifier>),
            )
            .with_state(LoginState::new(use_case, settings))
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_form_logs_in() {
        let response = app()
            .oneshot(form_request("username=alice&password=wonderland"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let response = app()
            .oneshot(form_request("username=alice&password=nope"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Login failure!");
    }

    #[tokio::test]
    async fn test_non_form_body_is_no_op() {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice","password":"wonderland"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_partial_form_is_no_op() {
        let response = app()
            .oneshot(form_request("username=alice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
