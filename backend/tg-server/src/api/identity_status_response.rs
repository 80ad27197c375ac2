use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IdentityStatusResponse {
    #[serde(rename = "userDetails")]
    pub user_details: String,
    pub iss: String,
}
