//! In-process store with the same observable behavior as `PgProductStore`.

use super::validation::round_cents;
use super::{ProductStore, PRODUCT_NOT_FOUND};
use crate::error::AppError;
use crate::model::{Product, ProductPayload};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// Rows are kept in id order, which is also insertion order. Ids start at 1.
#[derive(Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, payload: &ProductPayload) -> Result<Product, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let product = Product {
            id: table.last_id,
            name: payload.name.clone(),
            price: round_cents(payload.price),
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn read(&self, id: i32) -> Result<Product, AppError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.into()))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let table = self.table.read().await;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(table.rows.values().skip(offset).take(limit).cloned().collect())
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&product.id) {
            row.name = product.name.clone();
            row.price = round_cents(product.price);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}
