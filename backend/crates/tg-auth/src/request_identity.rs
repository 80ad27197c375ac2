/// Identity published to handlers after the tenant gate admits a request
///
/// Only the gate constructs one, so holding a `RequestIdentity` means the
/// request was admitted. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    user_details: String,
    issuer: Option<String>,
}

impl RequestIdentity {
    pub(crate) fn new(user_details: String, issuer: Option<String>) -> Self {
        Self {
            user_details,
            issuer,
        }
    }

    pub fn user_details(&self) -> &str {
        &self.user_details
    }

    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }
}
