//! Role-registry inspection, gated to administrators.

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use campuserp_auth::Role;

use crate::app::errors;
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/roles", get(list_roles))
}

/// GET /admin/roles — the closed role set with dashboard targets.
pub async fn list_roles(
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(err) = authz::require_role(&principal, &[Role::SuperAdmin, Role::SchoolAdmin]) {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string());
    }

    let roles: Vec<_> = Role::ALL
        .iter()
        .map(|role| {
            serde_json::json!({
                "name": role.as_str(),
                "dashboard": role.dashboard(),
            })
        })
        .collect();

    (StatusCode::OK, Json(serde_json::json!({ "roles": roles }))).into_response()
}
