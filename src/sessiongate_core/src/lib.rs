pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::{Credentials, CredentialsError, SubmittedForm},
    login_result::{LoginResult, RejectionReason},
    password::Password,
    session_id::SessionId,
    session_state::{SessionState, USERNAME_KEY, VALID_KEY},
    username::Username,
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError},
    services::{CredentialVerifier, VerifierError},
};

pub use http_abstraction::{AuthResponseBuilder, AuthResponseHelpers, ResponsePayload};
