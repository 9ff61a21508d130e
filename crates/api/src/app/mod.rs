//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: token issuing/validation wiring shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use campuserp_auth::ConfigError;

use crate::directory::UserDirectory;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// Fails closed: an unusable signing secret means no router, no listener.
pub fn build_app(
    config: &campuserp_auth::AuthConfig,
    directory: Arc<dyn UserDirectory>,
) -> Result<Router, ConfigError> {
    let services = Arc::new(services::AppServices::new(config, directory)?);
    let auth_state = middleware::AuthState {
        access: services.access_validator.clone(),
    };

    // Public surface: liveness + token issuing.
    let public = Router::new()
        .route("/health", get(routes::system::health))
        .nest("/auth", routes::auth::router().layer(Extension(services)));

    // Everything else sits behind access-token verification.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Ok(public.merge(protected))
}
