//! Product CRUD routes. `{id}` only matches digit segments (see `IdSegment`).

use crate::handlers::{create_product, delete_product, get_product, get_products, update_product};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(get_products))
        .route("/product", post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}
