//! Response body shapes and helpers. Every body is JSON.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"error": "..."}`
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"result": "success"}`
#[derive(Serialize)]
pub struct ResultBody {
    pub result: &'static str,
}

#[derive(Serialize)]
pub struct HomeBody {
    pub messages: &'static str,
    pub time: String,
    pub database: &'static str,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// 204 carrying `{"result":"success"}`. HTTP/1.1 servers drop the body of a 204 on the wire.
pub fn deleted() -> (StatusCode, Json<ResultBody>) {
    (
        StatusCode::NO_CONTENT,
        Json(ResultBody { result: "success" }),
    )
}
