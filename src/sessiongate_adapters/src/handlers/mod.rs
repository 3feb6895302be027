//! Framework-agnostic request handlers.
//!
//! Framework-specific routes extract the session cookie and form data, call
//! these handlers, and hand back whatever response the builder produced.

pub mod login;
pub mod session_status;

pub use login::{handle_login, session_cookie};
pub use session_status::handle_session_status;
