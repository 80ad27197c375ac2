pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::admitted_identity::AdmittedIdentity,
    identity_status_response::IdentityStatusResponse,
    status::identity_status,
};
pub use app_state::AppState;
pub use middleware::tenant_gate::tenant_gate;
pub use routes::build_router;
