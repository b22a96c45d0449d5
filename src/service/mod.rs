//! Data access for products: the `ProductStore` capability and its implementations.

mod crud;
mod memory;
mod validation;
pub use crud::PgProductStore;
pub use memory::InMemoryProductStore;
pub use validation::{ProductValidator, INVALID_PAYLOAD};

use crate::error::AppError;
use crate::model::{Product, ProductPayload};
use async_trait::async_trait;

/// Single-row storage operations for `Product`. Implementations must be safe to share across
/// concurrently running requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert and return the product with its store-assigned id.
    async fn create(&self, payload: &ProductPayload) -> Result<Product, AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn read(&self, id: i32) -> Result<Product, AppError>;

    /// Skip `offset` rows, return at most `limit`. Order is whatever the store yields.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    /// Overwrite name and price of the row with `product.id`. A missing row is not an error.
    async fn update(&self, product: &Product) -> Result<(), AppError>;

    /// Remove the row with this id. A missing row is not an error.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// True when the store answers a trivial query.
    async fn ping(&self) -> bool;
}

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
