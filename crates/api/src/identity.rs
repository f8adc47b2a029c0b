//! Request identity extractor.
//!
//! Authentication lives upstream of this service: the auth layer
//! verifies credentials and injects the resolved identity as the
//! `x-user-id` and `x-user-email` headers. This extractor turns those
//! headers into a [`Requester`] and rejects requests that carry none.
//! The authorization decision happens here, before the orchestrator is
//! ever invoked.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use purchase::Requester;

use crate::error::ApiError;

/// Extracts the authenticated caller's identity from injected headers.
#[derive(Debug, Clone)]
pub struct Identity(pub Requester);

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, "x-user-id");
        let user_email = header_value(parts, "x-user-email");

        match (user_id, user_email) {
            (Some(id), Some(email)) => Ok(Identity(Requester::new(id, email))),
            _ => {
                tracing::warn!(path = %parts.uri.path(), "request without injected identity");
                Err(ApiError::Unauthorized(
                    "No authenticated identity provided".to_string(),
                ))
            }
        }
    }
}
