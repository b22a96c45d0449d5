//! Payload validation against the product table's constraints.

use crate::error::AppError;
use crate::model::ProductPayload;
use rust_decimal::{Decimal, RoundingStrategy};

pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// `numeric(10,2)` holds at most 99_999_999.99.
fn price_limit() -> Decimal {
    Decimal::new(100_000_000, 0)
}

/// Round to cents the way a `numeric(10,2)` column does: half a cent goes away from zero.
pub(crate) fn round_cents(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub struct ProductValidator;

impl ProductValidator {
    /// Check the payload and return it with the price rounded to cents.
    pub fn validate(payload: ProductPayload) -> Result<ProductPayload, AppError> {
        if payload.name.trim().is_empty() {
            return Err(AppError::BadRequest(INVALID_PAYLOAD.into()));
        }
        let price = round_cents(payload.price);
        if price < Decimal::ZERO || price >= price_limit() {
            return Err(AppError::BadRequest(INVALID_PAYLOAD.into()));
        }
        Ok(ProductPayload {
            name: payload.name,
            price,
        })
    }
}
