use crate::ApiError;

use tg_auth::AuthError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn json_body(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_malformed_body_returns_403_with_reason() {
    let error: ApiError = AuthError::malformed_body("expected value at line 1").into();

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        json,
        serde_json::json!({"error": "Request body must be JSON and contain valid clientPrincipal."})
    );
}

#[tokio::test]
async fn test_missing_identity_returns_403_with_reason() {
    let error: ApiError = AuthError::missing_identity().into();

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "userDetails not found or invalid.");
}

#[tokio::test]
async fn test_tenant_not_allowed_returns_403_naming_domain() {
    let error: ApiError = AuthError::tenant_not_allowed("evil.com").into();

    let (status, json) = json_body(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Tenant 'evil.com' is not allowed.");
}

#[tokio::test]
async fn test_identity_not_propagated_returns_400() {
    let (status, json) = json_body(ApiError::identity_not_propagated()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "userDetails or iss claim not found");
}

#[test]
fn test_parse_details_never_reach_client_message() {
    let error: ApiError = AuthError::malformed_body("secret parser detail").into();

    match error {
        ApiError::Forbidden { code, message, .. } => {
            assert_eq!(code, "MALFORMED_BODY");
            assert!(!message.contains("secret parser detail"));
        }
        other => panic!("Expected Forbidden, got {:?}", other),
    }
}
