//! Product entity and the request payload used by create/update.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the `products` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body of POST /product and PUT /product/{id}. Any `id` in the body is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl ProductPayload {
    /// Attach an id, e.g. the one taken from the request path on update.
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
