//! # Sessiongate - Session Login Library
//!
//! Facade crate that re-exports the public APIs of the session login components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! sessiongate = { path = "../sessiongate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `SessionState`, `Credentials`, `LoginResult`, etc.
//! - **Ports**: `SessionStore`, `CredentialVerifier`
//! - **Use cases**: `SessionLoginUseCase`, `SessionStatusUseCase`
//! - **Adapters**: `HashMapSessionStore`, `RedisSessionStore`, `HttpCredentialVerifier`, etc.
//! - **Service**: `SessionGateService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use sessiongate_core::*;
}

pub use sessiongate_core::{
    Credentials, LoginResult, Password, RejectionReason, SessionId, SessionState, SubmittedForm,
    Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use sessiongate_core::{CredentialVerifier, SessionStore, SessionStoreError, VerifierError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use sessiongate_application::*;
}

pub use sessiongate_application::{
    SessionAuthenticator, SessionLoginUseCase, SessionStatus, SessionStatusUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic HTTP handlers
    pub mod handlers {
        pub use sessiongate_adapters::handlers::*;
    }

    /// Session store implementations
    pub mod persistence {
        pub use sessiongate_adapters::persistence::*;
    }

    /// Credential verifier implementations
    pub mod verification {
        pub use sessiongate_adapters::verification::*;
    }

    /// Configuration
    pub mod config {
        pub use sessiongate_adapters::config::*;
    }
}

pub use sessiongate_adapters::{
    persistence::{ConfiguredSessionStore, HashMapSessionStore, RedisSessionStore},
    verification::{ConfiguredVerifier, HttpCredentialVerifier, StaticCredentialVerifier},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use sessiongate_service::SessionGateService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
