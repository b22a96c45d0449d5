//! Extract the `{id}` path segment, matching it as a routing constraint.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

/// The raw `{id}` segment, guaranteed to be one or more ASCII digits.
///
/// Any other segment is rejected with a bare 404, the same response the router gives for an
/// unknown path, so handlers never see it. Whether the digits fit an id is left to the handler.
#[derive(Clone, Debug)]
pub struct IdSegment(pub String);

impl IdSegment {
    pub fn parse(&self) -> Option<i32> {
        self.0.parse().ok()
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl<S> FromRequestParts<S> for IdSegment
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        if !is_digits(&segment) {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(IdSegment(segment))
    }
}
