use crate::{AllowedTenants, AuthError, ClientPrincipal, RequestIdentity, Result as AuthErrorResult};

use log::debug;

/// Admission policy for inbound requests
///
/// Evaluation order is fixed and each step fails with its own error:
/// 1. body must be a JSON object (`MalformedBody`)
/// 2. `userDetails` must be present and contain `@` (`MissingIdentity`)
/// 3. the domain after the last `@` must be allow-listed (`TenantNotAllowed`)
///
/// The gate holds no mutable state, so one instance is shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct TenantGate {
    allowed: AllowedTenants,
}

impl TenantGate {
    pub fn new(allowed: AllowedTenants) -> Self {
        Self { allowed }
    }

    pub fn allowed_tenants(&self) -> &AllowedTenants {
        &self.allowed
    }

    /// Decide admission for a raw request body
    #[track_caller]
    pub fn evaluate(&self, body: &[u8]) -> AuthErrorResult<RequestIdentity> {
        let principal = ClientPrincipal::from_body(body)?;
        self.admit(principal)
    }

    /// Apply the allow-list to an already parsed principal
    #[track_caller]
    pub fn admit(&self, principal: ClientPrincipal) -> AuthErrorResult<RequestIdentity> {
        let issuer = principal.issuer().map(str::to_string);

        let Some(user_details) = principal.user_details else {
            return Err(AuthError::missing_identity());
        };
        let Some(domain) = tenant_domain(&user_details) else {
            return Err(AuthError::missing_identity());
        };

        if !self.allowed.contains(domain) {
            return Err(AuthError::tenant_not_allowed(domain));
        }

        debug!("Admitted {} (tenant {})", user_details, domain);
        Ok(RequestIdentity::new(user_details, issuer))
    }
}

/// Domain part of an email-style identifier: everything after the last `@`.
///
/// Returns `None` when there is no `@`. An identifier ending in `@` yields an
/// empty domain, which no allow-list contains.
pub fn tenant_domain(user_details: &str) -> Option<&str> {
    user_details.rsplit_once('@').map(|(_, domain)| domain)
}
