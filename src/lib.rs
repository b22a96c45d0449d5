//! Product API: JSON-over-REST CRUD for a single `products` table on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::{DatabaseSettings, Settings};
pub use error::{AppError, ConfigError};
pub use model::{Product, ProductPayload};
pub use routes::{app, common_routes, product_routes, API_PREFIX, BODY_LIMIT};
pub use service::{InMemoryProductStore, PgProductStore, ProductStore};
pub use state::AppState;
