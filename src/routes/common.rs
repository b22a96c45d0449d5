//! Common routes: greeting and health.

use crate::handlers::home;
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health. The bare prefix route is added by `app`, since nesting cannot produce a
/// trailing-slash path.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(home))
        .with_state(state)
}
