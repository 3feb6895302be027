//! Framework-agnostic session status handler.

use sessiongate_application::{SessionLoginError, SessionStatus, SessionStatusUseCase};
use sessiongate_core::{AuthResponseBuilder, ResponsePayload, SessionId, SessionStore};

/// Report whether the caller's session is authenticated.
///
/// Always answers 200 with `{"valid": bool}`, plus `username` when valid.
pub async fn handle_session_status<S, B>(
    use_case: &SessionStatusUseCase<S>,
    session_id: Option<SessionId>,
    builder: B,
) -> Result<B::Response, SessionLoginError>
where
    S: SessionStore,
    B: AuthResponseBuilder,
{
    let mut payload = ResponsePayload::new();

    match use_case.execute(session_id).await? {
        SessionStatus::Authenticated { username } => {
            payload.insert("valid", true).insert("username", username);
        }
        SessionStatus::Anonymous => {
            payload.insert("valid", false);
        }
    }

    Ok(payload.send(builder, 200))
}
