use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_http::request_id::RequestId;

/// Header carrying the request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request correlation data handed explicitly to the service layer.
///
/// The ID is the one assigned by `SetRequestIdLayer` (which reuses a client-supplied
/// `X-Request-ID`), so it matches the value echoed in the response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Context for work not triggered by a request, with a freshly generated ID.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.header_value())
            .or_else(|| parts.headers.get(REQUEST_ID_HEADER))
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty());

        Ok(match request_id {
            Some(request_id) => Self::new(request_id),
            None => Self::generate(),
        })
    }
}
