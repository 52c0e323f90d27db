//! Repository for the `products` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, created_at, updated_at";

/// Provides CRUD operations for products. One statement per call.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// `created_at` and `updated_at` both take the column default, so they
    /// are identical on a fresh row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all products ordered by ascending ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id ASC");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Replace name, description and price, and bump `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the database clock does.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                updated_at = GREATEST(NOW(), updated_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
