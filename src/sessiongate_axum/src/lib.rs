//! Axum integration for the session login flow.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_core: response traits       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_axum: Axum implementations  │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use sessiongate_axum::{routes, LoginState};
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<Store, Verifier>))
//!     .with_state(login_state);
//! ```

pub mod adapters;
pub mod routes;
pub mod state;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
pub use state::{LoginState, SessionStatusState};
