//! Request extractors shared by the API handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the operator's user id.
///
/// Session handling runs in front of this service and forwards the
/// authenticated user id here. The services re-require it on every mutating
/// call, so a missing header surfaces as a validation error rather than a
/// panic deep in the stack.
pub const OPERATOR_HEADER: &str = "x-user-id";

/// The operator id attached to a mutating request, when present.
#[derive(Debug, Clone)]
pub struct OperatorId(pub Option<String>);

impl OperatorId {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for OperatorId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let operator = parts
            .headers
            .get(OPERATOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Ok(Self(operator))
    }
}
