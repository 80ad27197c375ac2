use crate::{AdmittedIdentity, ApiError};

use tg_auth::TenantGate;

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::Request;

#[tokio::test]
async fn test_extractor_reads_identity_from_extensions() {
    let identity = TenantGate::default()
        .evaluate(br#"{"clientPrincipal":{"userDetails":"alice@microsoft.com","claims":[{"typ":"iss","val":"idp1"}]}}"#)
        .unwrap();

    let request = Request::builder()
        .extension(identity.clone())
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdmittedIdentity::from_request_parts(&mut parts, &()).await;

    let AdmittedIdentity(extracted) = result.unwrap();
    assert_eq!(extracted, identity);
    assert_eq!(extracted.user_details(), "alice@microsoft.com");
}

#[tokio::test]
async fn test_extractor_without_identity_rejects_with_bad_request() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AdmittedIdentity::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
