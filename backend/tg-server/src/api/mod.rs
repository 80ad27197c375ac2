pub mod error;
pub mod extractors;
pub mod identity_status_response;
pub mod status;
