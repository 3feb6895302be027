pub mod use_cases;

pub use use_cases::{
    login::{SessionLoginError, SessionLoginResponse, SessionLoginUseCase},
    session_authenticator::{LoginTransition, SessionAuthenticator, has_valid_session},
    session_status::{SessionStatus, SessionStatusUseCase},
};
