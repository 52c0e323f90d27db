#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_db::PoolConfig;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://catalog@127.0.0.1:1/catalog".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 2,
        db_acquire_timeout_secs: 1,
    }
}

/// Build the full application router, with all middleware layers, on the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state).unwrap()
}

/// Build the application on a pool pointing at a closed port.
///
/// Nothing connects until a handler touches the database, so requests
/// rejected before that point never need PostgreSQL; requests that do reach
/// the database observe an outage once the short acquire timeout elapses.
pub fn build_offline_app() -> Router {
    let config = test_config();
    let pool = catalog_db::create_lazy_pool(
        &config.database_url,
        &PoolConfig {
            max_connections: 1,
            acquire_timeout: Duration::from_millis(500),
        },
    )
    .unwrap();
    build_test_app(pool)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, json.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, json.to_string()).await
}

/// Send a raw body with a JSON content type; lets tests submit malformed JSON.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
