//! Tenant gate middleware
//!
//! Runs in front of every route. Buffers the body, asks the `TenantGate` for
//! a decision, and either answers 403 or forwards the request with the
//! admitted `RequestIdentity` in its extensions. The body is handed on
//! unchanged.

use crate::{ApiResult, AppState};

use tg_auth::AuthError;

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::debug;

/// `axum::middleware::from_fn_with_state` entry point
pub async fn tenant_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    debug!(
        "Request received at tenant gate: {} {}",
        request.method(),
        request.uri().path()
    );

    let (mut parts, body) = request.into_parts();

    // An unreadable or oversized body cannot carry a usable client principal
    let bytes = to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| AuthError::malformed_body(format!("unreadable body: {}", e)))?;

    let identity = state.gate.evaluate(&bytes)?;
    parts.extensions.insert(identity);

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
