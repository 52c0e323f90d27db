pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /products                                        list, create
/// /products/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/products", product::router())
}
