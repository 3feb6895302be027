pub mod configured_verifier;
pub mod http_credential_verifier;
pub mod static_credential_verifier;

pub use configured_verifier::{ConfiguredVerifier, VerifierSetupError};
pub use http_credential_verifier::HttpCredentialVerifier;
pub use static_credential_verifier::StaticCredentialVerifier;
