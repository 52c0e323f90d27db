//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::{validate_price, ENTITY};
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// Path of the single-product resource, used for the `Location` header.
pub fn product_location(id: DbId) -> String {
    format!("/products/{id}")
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_price(&input.price)?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((
        StatusCode::CREATED,
        [(LOCATION, product_location(product.id))],
        Json(product),
    ))
}

/// PUT /products/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    validate_price(&input.price)?;

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(product_id = id, "Product updated");

    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if ProductRepo::delete(&state.pool, id).await? {
        tracing::info!(product_id = id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
