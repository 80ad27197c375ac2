//! Axum extractor for the identity published by the tenant gate

use crate::ApiError;

use tg_auth::RequestIdentity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity of an admitted request
///
/// Reads the `RequestIdentity` the tenant gate stored in the request
/// extensions. Handlers never look at the body for identity. A missing
/// identity means the gate did not run for this route, and the request is
/// refused with 400 instead of being treated as admitted.
#[derive(Debug, Clone)]
pub struct AdmittedIdentity(pub RequestIdentity);

impl<S> FromRequestParts<S> for AdmittedIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<RequestIdentity>().cloned();

        async move {
            match identity {
                Some(identity) => Ok(AdmittedIdentity(identity)),
                None => {
                    log::error!("No RequestIdentity in request extensions");
                    Err(ApiError::identity_not_propagated())
                }
            }
        }
    }
}
