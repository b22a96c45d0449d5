//! Product CRUD against PostgreSQL. Values are always bound as parameters.

use super::{ProductStore, PRODUCT_NOT_FOUND};
use crate::error::AppError;
use crate::model::{Product, ProductPayload};
use async_trait::async_trait;
use sqlx::PgPool;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

const INSERT: &str = "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id";
const SELECT_ONE: &str = "SELECT id, name, price FROM products WHERE id = $1";
const SELECT_PAGE: &str = "SELECT id, name, price FROM products LIMIT $1 OFFSET $2";
const UPDATE: &str = "UPDATE products SET name = $1, price = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM products WHERE id = $1";

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        tracing::debug!(sql = %INSERT, "query");
        let id = sqlx::query_scalar::<_, i32>(INSERT)
            .bind(&payload.name)
            .bind(payload.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict(e.to_string())
                } else {
                    AppError::Db(e)
                }
            })?;
        Ok(payload.clone().with_id(id))
    }

    async fn read(&self, id: i32) -> Result<Product, AppError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        sqlx::query_as::<_, Product>(SELECT_ONE)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => AppError::NotFound(PRODUCT_NOT_FOUND.into()),
                other => AppError::Db(other),
            })
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        tracing::debug!(sql = %SELECT_PAGE, offset, limit, "query");
        let rows = sqlx::query_as::<_, Product>(SELECT_PAGE)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        tracing::debug!(sql = %UPDATE, id = product.id, "query");
        sqlx::query(UPDATE)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .fetch_optional(&self.pool)
            .await
            .is_ok()
    }
}
