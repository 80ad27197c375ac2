use crate::{AdmittedIdentity, ApiError, ApiResult, IdentityStatusResponse};

use axum::Json;
use log::info;

/// GET|POST /api/test - Echo the identity the tenant gate admitted
///
/// Requires both `userDetails` and an issuer; an admitted request without an
/// `iss` claim is answered with 400.
pub async fn identity_status(
    AdmittedIdentity(identity): AdmittedIdentity,
) -> ApiResult<Json<IdentityStatusResponse>> {
    info!("Identity status requested by {}", identity.user_details());

    let Some(issuer) = identity.issuer() else {
        return Err(ApiError::identity_not_propagated());
    };

    Ok(Json(IdentityStatusResponse {
        user_details: identity.user_details().to_string(),
        iss: issuer.to_string(),
    }))
}
