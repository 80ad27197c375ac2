#![allow(dead_code)]

//! Test infrastructure for tg-server API tests

use tg_auth::{AllowedTenants, TenantGate};
use tg_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_MAX_BODY_BYTES: usize = 64 * 1024;

/// Create AppState with the default tenant allow-list
pub fn create_test_app_state() -> AppState {
    AppState::new(TenantGate::default(), TEST_MAX_BODY_BYTES)
}

/// Create AppState admitting only the given tenants
pub fn create_app_state_for(tenants: &[&str]) -> AppState {
    let gate = TenantGate::new(AllowedTenants::new(tenants.iter().copied()));
    AppState::new(gate, TEST_MAX_BODY_BYTES)
}

pub fn create_test_router() -> Router {
    build_router(create_test_app_state())
}

/// Send a request and return status plus raw body bytes
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

/// POST a body to the given uri and parse the JSON response
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, Method::POST, uri, body.to_string()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Build a client principal body with the given userDetails and claims
pub fn principal_body(user_details: &str, claims: &[(&str, &str)]) -> String {
    let claims: Vec<serde_json::Value> = claims
        .iter()
        .map(|(typ, val)| serde_json::json!({"typ": typ, "val": val}))
        .collect();

    serde_json::json!({
        "clientPrincipal": {
            "userDetails": user_details,
            "claims": claims,
        }
    })
    .to_string()
}
