use tg_auth::{AllowedTenants, TenantGate};

use std::sync::Arc;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<TenantGate>,
    /// Largest request body the gate will buffer
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(gate: TenantGate, max_body_bytes: usize) -> Self {
        Self {
            gate: Arc::new(gate),
            max_body_bytes,
        }
    }

    /// Convert config types for tg-auth
    pub fn from_config(config: &tg_config::Config) -> Self {
        let allowed = AllowedTenants::new(config.tenants.allowed.iter().cloned());
        Self::new(TenantGate::new(allowed), config.server.max_body_bytes)
    }
}
