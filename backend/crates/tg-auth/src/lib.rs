pub mod allowed_tenants;
pub mod claim;
pub mod client_principal;
pub mod error;
pub mod request_identity;
pub mod tenant_gate;

pub use allowed_tenants::AllowedTenants;
pub use claim::Claim;
pub use client_principal::ClientPrincipal;
pub use error::{AuthError, Result};
pub use request_identity::RequestIdentity;
pub use tenant_gate::TenantGate;

/// Claim type that carries the token issuer
pub const ISSUER_CLAIM_TYPE: &str = "iss";

/// Tenants admitted when no allow-list is configured
pub const DEFAULT_ALLOWED_TENANTS: [&str; 2] = ["microsoft.com", "contoso.com"];
