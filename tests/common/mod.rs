#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use product_api::{app, AppError, AppState, InMemoryProductStore, Product, ProductPayload, ProductStore};
use serde_json::Value;
use tower::ServiceExt;

pub fn memory_app() -> Router {
    app(AppState::new(InMemoryProductStore::new()))
}

/// Send one request through the router. An empty body comes back as `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn create(app: &Router, name: &str, price: f64) -> Value {
    let body = serde_json::json!({ "name": name, "price": price }).to_string();
    let (status, value) = send(app, "POST", "/api/v1/product", Some(&body)).await;
    assert_eq!(status, StatusCode::CREATED);
    value
}

/// Every storage call fails the way an unreachable database would.
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn create(&self, _payload: &ProductPayload) -> Result<Product, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn read(&self, _id: i32) -> Result<Product, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn list(&self, _offset: i64, _limit: i64) -> Result<Vec<Product>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _product: &Product) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> bool {
        false
    }
}

pub const CONFLICT_DETAIL: &str =
    "error returned from database: duplicate key value violates unique constraint \"products_pkey\"";

/// Reports a uniqueness violation on every insert.
pub struct ConflictingStore;

#[async_trait]
impl ProductStore for ConflictingStore {
    async fn create(&self, _payload: &ProductPayload) -> Result<Product, AppError> {
        Err(AppError::Conflict(CONFLICT_DETAIL.into()))
    }

    async fn read(&self, _id: i32) -> Result<Product, AppError> {
        Err(AppError::NotFound("Product not found".into()))
    }

    async fn list(&self, _offset: i64, _limit: i64) -> Result<Vec<Product>, AppError> {
        Ok(Vec::new())
    }

    async fn update(&self, _product: &Product) -> Result<(), AppError> {
        Ok(())
    }

    async fn delete(&self, _id: i32) -> Result<(), AppError> {
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}
