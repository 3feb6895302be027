//! Framework-agnostic HTTP response abstraction.
//!
//! Web frameworks implement [`AuthResponseBuilder`] on a wrapper of their own
//! response builder. Handlers in `sessiongate_adapters` only ever talk to this
//! trait, so the login flow does not depend on any particular framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_core: response traits       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_axum: AxumResponseBuilder   │
//! │  impl AuthResponseBuilder for it         │
//! └──────────────────────────────────────────┘
//! ```

use serde_json::{Map, Value};

/// Trait for building HTTP responses.
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .cookie("session_id=...; HttpOnly")
///     .json_body(json!({"result": "authenticated"}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"session_id=...; HttpOnly; SameSite=Lax; Max-Age=3600"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for common responses.
///
/// Automatically implemented for all types that implement `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// Create a 200 OK JSON response
    fn ok_json(self, body: Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// Create a 204 No Content response
    fn no_content(self) -> Self::Response {
        self.status(204).build()
    }

    /// Create a 500 Internal Server Error response
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}

/// Accumulating response body.
///
/// Callers fill it in with [`ResponsePayload::insert`] and finish with
/// [`ResponsePayload::send`], which consumes the payload: once a response is
/// sent nothing else can be added to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsePayload {
    response: Map<String, Value>,
}

impl ResponsePayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.response.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.response.get(key)
    }

    /// Serialize the accumulated payload as the JSON body and build the response.
    pub fn send<B: AuthResponseBuilder>(self, builder: B, status: u16) -> B::Response {
        builder
            .status(status)
            .json_body(Value::Object(self.response))
            .build()
    }
}
