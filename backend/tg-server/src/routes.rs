use crate::{AppState, identity_status, tenant_gate};

use axum::{Router, middleware, routing::get};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity status endpoint
        .route("/api/test", get(identity_status).post(identity_status))
        // Every request passes the tenant gate before reaching a handler
        .layer(middleware::from_fn_with_state(state.clone(), tenant_gate))
        .with_state(state)
}
