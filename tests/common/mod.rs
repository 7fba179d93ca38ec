#![allow(dead_code)]

use axum::{Router, body::Body, http::Request};
use portops::config::Config;
use portops::infrastructure::AppState;
use portops::models::SurveillantType;
use portops::server;
use serde_json::Value;
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::MockServer;

pub const LIST_PATH: &str = "/api/GetEntityFieldsWithFilters";

// Config pointing both backends at mock servers, with fast retries
pub fn test_config(referential: &MockServer, port_ops: &MockServer) -> Config {
    Config {
        referential_api_url: referential.uri(),
        port_ops_api_url: port_ops.uri(),
        port: 0,
        cors_allowed_origins: Vec::new(),
        http_timeout: Duration::from_secs(5),
        retry_max_retries: 2,
        retry_backoff: Duration::from_millis(10),
        reference_cache_ttl: Duration::from_secs(60),
        reference_page_size: 1000,
        default_page_size: 10,
        surveillant_types: vec![SurveillantType {
            id: 1,
            label: "Société de surveillance".to_string(),
        }],
    }
}

pub fn test_app(referential: &MockServer, port_ops: &MockServer) -> Router {
    let config = test_config(referential, port_ops);
    let state = AppState::from_config(&config).expect("Failed to build state");
    server::build_router(state, &config.cors_allowed_origins)
}

// Send one request and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (axum::http::StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

// Send one request when only the status matters (axum rejections are plain text)
pub async fn send_status(app: Router, request: Request<Body>) -> axum::http::StatusCode {
    app.oneshot(request).await.unwrap().status()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
