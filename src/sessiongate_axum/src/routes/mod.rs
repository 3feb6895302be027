//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and return their responses.

pub mod error;
pub mod login;
pub mod session;

pub use error::RouteError;
pub use login::login;
pub use session::session_status;
