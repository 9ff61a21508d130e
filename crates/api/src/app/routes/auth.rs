//! Token issuing endpoints: login and refresh.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use campuserp_auth::Principal;

use crate::app::dto::{LoginRequest, TokenResponse};
use crate::app::errors;
use crate::app::services::AppServices;
use crate::middleware::extract_bearer;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
}

/// POST /auth/login — verify credentials and issue a token pair.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    let Some(principal) = services.directory.verify(&body.email, &body.password) else {
        // Identical response for unknown email and wrong password.
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid email or password",
        );
    };

    issue_response(&services, &principal)
}

/// POST /auth/refresh — exchange `Bearer <refresh token>` for a new pair.
///
/// Stateless re-issue: the presented refresh token is not revoked and stays
/// valid until its own expiry. Access tokens are rejected here just as
/// refresh tokens are rejected by the access middleware.
pub async fn refresh(
    Extension(services): Extension<Arc<AppServices>>,
    headers: axum::http::HeaderMap,
) -> axum::response::Response {
    let token = match extract_bearer(&headers) {
        Ok(token) => token,
        Err(status) => {
            return errors::json_error(status, "missing_token", "expected a bearer refresh token");
        }
    };

    let principal = match services.refresh_validator.verify(token) {
        Ok(principal) => principal,
        Err(err) => {
            tracing::debug!(error = %err, "rejected refresh token");
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_refresh_token",
                "refresh token was not accepted",
            );
        }
    };

    issue_response(&services, &principal)
}

fn issue_response(services: &AppServices, principal: &Principal) -> axum::response::Response {
    match services.issuer.issue_pair(principal) {
        Ok(pair) => (StatusCode::OK, Json(TokenResponse::new(pair, principal))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to issue token pair");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_issue_failed",
                "could not issue tokens",
            )
        }
    }
}
