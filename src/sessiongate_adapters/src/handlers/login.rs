//! Framework-agnostic login handler.

use sessiongate_application::{SessionLoginError, SessionLoginUseCase};
use sessiongate_core::{
    AuthResponseBuilder, AuthResponseHelpers, CredentialVerifier, LoginResult, RejectionReason,
    ResponsePayload, SessionId, SessionStore, SubmittedForm,
};

use crate::config::SessionSettings;

/// Handle a login request.
///
/// # Arguments
///
/// * `use_case` - Login use case wired with a session store and verifier
/// * `session_id` - Session id taken from the request cookie, if any
/// * `form` - Submitted form fields
/// * `cookie_settings` - How the session cookie is issued
/// * `builder` - Response builder (framework-specific but implements our trait)
///
/// # Responses
///
/// * `Authenticated` - 200 with the username, plus the session cookie
/// * `AlreadyAuthenticated` - 200 with the username
/// * `Rejected` - 401 (credentials refused) or 503 (verifier unavailable) with an error message
/// * `NoOp` - 204 with no body
pub async fn handle_login<S, V, B>(
    use_case: &SessionLoginUseCase<S, V>,
    session_id: Option<SessionId>,
    form: SubmittedForm,
    cookie_settings: &SessionSettings,
    builder: B,
) -> Result<B::Response, SessionLoginError>
where
    S: SessionStore,
    V: CredentialVerifier,
    B: AuthResponseBuilder,
{
    let response = use_case.execute(session_id, form.into_credentials()).await?;

    let mut payload = ResponsePayload::new();
    payload.insert("result", response.result.as_str());

    let sent = match response.result {
        LoginResult::NoOp => builder.no_content(),
        LoginResult::AlreadyAuthenticated => {
            payload.insert("username", response.username);
            payload.send(builder, 200)
        }
        LoginResult::Authenticated => {
            payload.insert("username", response.username);
            let builder = match &response.session_id {
                Some(id) => builder.cookie(&session_cookie(cookie_settings, id)),
                None => builder,
            };
            payload.send(builder, 200)
        }
        LoginResult::Rejected(reason) => {
            payload.insert("error", reason.message());
            let status = match reason {
                RejectionReason::VerificationFailed => 401,
                RejectionReason::VerifierUnavailable => 503,
            };
            payload.send(builder, status)
        }
    };

    Ok(sent)
}

/// Build the `Set-Cookie` value binding the client to its session.
pub fn session_cookie(settings: &SessionSettings, id: &SessionId) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        settings.cookie_name, id, settings.ttl_seconds
    );
    if settings.secure_cookie {
        cookie.push_str("; Secure");
    }
    cookie
}
