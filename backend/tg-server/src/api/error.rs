//! REST API error types
//!
//! Every error renders as `{"error": "<reason>"}` with its status code. The
//! reason is safe to show to clients; the location is only logged.

use tg_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const IDENTITY_NOT_PROPAGATED: &str = "userDetails or iss claim not found";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected by the tenant gate (403)
    #[error("Forbidden ({code}): {message} {location}")]
    Forbidden {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// A handler ran without the identity the gate should have published
    #[track_caller]
    pub fn identity_not_propagated() -> Self {
        ApiError::BadRequest {
            message: IDENTITY_NOT_PROPAGATED.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Rejections are routine traffic, not server faults
        log::warn!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::Forbidden { message, .. } => message,
            ApiError::BadRequest { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Every tenant gate failure is a 403 carrying the gate's reason
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Tenant gate failure: {}", e);

        ApiError::Forbidden {
            code: e.error_code(),
            message: e.reason(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
