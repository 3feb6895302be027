mod request_tracing;
mod service;

pub use request_tracing::{make_span_with_request_id, on_request, on_response};
pub use service::SessionGateService;
