//! Route table: every endpoint lives under `API_PREFIX`.

mod common;
mod product;
pub use common::common_routes;
pub use product::product_routes;

use crate::handlers::home;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

/// Bodies larger than this fail to extract and get the usual invalid-payload 400.
pub const BODY_LIMIT: usize = 64 * 1024;

/// The full application router.
pub fn app(state: AppState) -> Router {
    let api = common_routes(state.clone()).merge(product_routes(state.clone()));
    Router::new()
        .route("/api/v1/", get(home))
        .with_state(state)
        .nest(API_PREFIX, api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
