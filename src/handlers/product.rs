//! Product CRUD handlers: get, list, create, update, delete.

use crate::error::AppError;
use crate::extractors::{IdSegment, JsonPayload};
use crate::model::ProductPayload;
use crate::response;
use crate::service::ProductValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

pub const INVALID_PRODUCT_ID: &str = "Invalid product ID";

/// Page size used when `limit` is absent or outside 1..=MAX_PAGE_SIZE.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Clamp list paging: negative start becomes 0, a limit outside 1..=10 becomes 10.
pub fn clamp_page(start: i64, limit: i64) -> (i64, i64) {
    let limit = if (1..=MAX_PAGE_SIZE).contains(&limit) {
        limit
    } else {
        MAX_PAGE_SIZE
    };
    (start.max(0), limit)
}

/// Integer query parameter; absent or unparsable values read as 0.
fn int_param(params: &HashMap<String, String>, key: &str) -> i64 {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

pub async fn get_product(
    State(state): State<AppState>,
    id: IdSegment,
) -> Result<impl IntoResponse, AppError> {
    let id = id
        .parse()
        .ok_or_else(|| AppError::BadRequest(INVALID_PRODUCT_ID.into()))?;
    tracing::info!(id, "fetching product");
    let product = state.store.read(id).await?;
    Ok(response::ok(product))
}

pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, limit) = clamp_page(int_param(&params, "start"), int_param(&params, "limit"));
    tracing::info!(start, limit, "fetching products");
    let products = state.store.list(start, limit).await?;
    Ok(response::ok(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let payload = ProductValidator::validate(payload)?;
    tracing::info!(name = %payload.name, "creating product");
    let product = state.store.create(&payload).await?;
    Ok(response::created(product))
}

/// Unparsable ids answer 404 here, unlike get/delete, to stay wire-compatible.
pub async fn update_product(
    State(state): State<AppState>,
    id: IdSegment,
    JsonPayload(payload): JsonPayload<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = id
        .parse()
        .ok_or_else(|| AppError::NotFound(INVALID_PRODUCT_ID.into()))?;
    tracing::info!(id, "updating product");
    let product = ProductValidator::validate(payload)?.with_id(id);
    state.store.update(&product).await?;
    Ok(response::ok(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: IdSegment,
) -> Result<impl IntoResponse, AppError> {
    let id = id
        .parse()
        .ok_or_else(|| AppError::BadRequest(INVALID_PRODUCT_ID.into()))?;
    tracing::info!(id, "deleting product");
    state.store.delete(id).await?;
    Ok(response::deleted())
}
