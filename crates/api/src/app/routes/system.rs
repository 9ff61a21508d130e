use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo of the verified principal, as reconstructed from the access token.
pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "id": principal.id().to_string(),
        "email": principal.email(),
        "role": principal.role().as_str(),
        "dashboard": principal.role().dashboard(),
    }))
}
