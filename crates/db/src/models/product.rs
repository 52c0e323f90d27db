//! Product entity model and DTOs.

use catalog_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
///
/// `price` is written to JSON as a number.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `id`, `createdAt` and `updatedAt` are server-owned; if a client sends
/// them they are ignored. `price` accepts a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}

/// DTO for replacing the mutable fields of an existing product (PUT).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}
