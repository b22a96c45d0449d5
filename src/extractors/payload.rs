//! JSON body extractor that ignores `Content-Type` and reports every failure the same way.

use crate::error::AppError;
use crate::service::INVALID_PAYLOAD;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_PAYLOAD.into()))?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            AppError::BadRequest(INVALID_PAYLOAD.into())
        })?;
        Ok(JsonPayload(value))
    }
}
