//! Error conversions - HTTP framework integration for [`AppError`]
//!
//! Renders [`AppError`] as the JSON error body shared by every endpoint.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// JSON エラーレスポンスの本文
///
/// ```json
/// {"error_code": 400, "error": "INSUFFICIENT_BALANCE", "message": "...", "action": null}
/// ```
#[cfg(feature = "axum")]
fn error_body(err: &AppError) -> serde_json::Value {
    serde_json::json!({
        "error_code": err.status_code(),
        "error": err.code(),
        "message": err.message(),
        "action": err.action(),
    })
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(error_body(&self))).into_response()
    }
}
