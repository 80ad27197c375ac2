use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed request body: {message} {location}")]
    MalformedBody {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing or invalid userDetails {location}")]
    MissingIdentity { location: ErrorLocation },

    #[error("Tenant '{domain}' is not allowed {location}")]
    TenantNotAllowed {
        domain: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn malformed_body<S: Into<String>>(message: S) -> Self {
        Self::MalformedBody {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_identity() -> Self {
        Self::MissingIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn tenant_not_allowed<S: Into<String>>(domain: S) -> Self {
        Self::TenantNotAllowed {
            domain: domain.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing reason. Never includes the parse error or source location.
    pub fn reason(&self) -> String {
        match self {
            Self::MalformedBody { .. } => {
                "Request body must be JSON and contain valid clientPrincipal.".to_string()
            }
            Self::MissingIdentity { .. } => "userDetails not found or invalid.".to_string(),
            Self::TenantNotAllowed { domain, .. } => {
                format!("Tenant '{}' is not allowed.", domain)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedBody { .. } => "MALFORMED_BODY",
            Self::MissingIdentity { .. } => "MISSING_IDENTITY",
            Self::TenantNotAllowed { .. } => "TENANT_NOT_ALLOWED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
