use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Consistent `{error, message}` envelope for failure responses.
///
/// Auth failures deliberately carry no detail about which check failed;
/// the specific cause is logged server-side only.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
