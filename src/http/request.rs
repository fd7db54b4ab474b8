//! Request ID generation.
//!
//! Every request gets an `x-request-id` (UUID v4) unless the client already
//! sent one; the id is echoed back on the response.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Request ID header name.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a random UUID v4 per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
