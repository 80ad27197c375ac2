use crate::{AuthError, Claim, ISSUER_CLAIM_TYPE, Result as AuthErrorResult};

use serde_json::{Map, Value};

/// Caller-supplied identity assertion carried in the request body
///
/// ```json
/// { "clientPrincipal": { "userDetails": "alice@contoso.com",
///                        "claims": [ { "typ": "iss", "val": "..." } ] } }
/// ```
///
/// Nothing here is signed or verified. The principal is only as trustworthy
/// as the upstream layer that populated the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPrincipal {
    pub user_details: Option<String>,
    pub claims: Vec<Claim>,
}

impl ClientPrincipal {
    /// Parse a raw request body.
    ///
    /// Only a body that is not a JSON object is an error. A missing or
    /// non-object `clientPrincipal` yields an empty principal, and the
    /// admission policy decides what to do with it.
    #[track_caller]
    pub fn from_body(body: &[u8]) -> AuthErrorResult<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AuthError::malformed_body(format!("invalid JSON: {}", e)))?;

        let Value::Object(root) = value else {
            return Err(AuthError::malformed_body("body is not a JSON object"));
        };

        match root.get("clientPrincipal") {
            Some(Value::Object(principal)) => Ok(Self::from_object(principal)),
            _ => Ok(Self::default()),
        }
    }

    fn from_object(principal: &Map<String, Value>) -> Self {
        let user_details = principal
            .get("userDetails")
            .and_then(Value::as_str)
            .map(str::to_string);

        let claims = principal
            .get("claims")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Claim::from_entry).collect())
            .unwrap_or_default();

        Self {
            user_details,
            claims,
        }
    }

    /// Value of the first claim of the given type, in document order
    pub fn first_claim(&self, claim_type: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.is_type(claim_type))
            .map(|claim| claim.value.as_str())
    }

    pub fn issuer(&self) -> Option<&str> {
        self.first_claim(ISSUER_CLAIM_TYPE)
    }
}
