/**
 * Error Conversion
 *
 * This module converts `ApiError` into HTTP responses so handlers can
 * return it directly with `?`.
 *
 * # Response Format
 *
 * Every error becomes the standard envelope:
 * ```json
 * { "ok": false, "message": "Error loading Users" }
 * ```
 * Store errors (500) additionally carry the underlying detail:
 * ```json
 * { "ok": false, "message": "Error loading Users", "err": "..." }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Store { message, detail } => serde_json::json!({
                "ok": false,
                "message": message,
                "err": detail,
            }),
            other => serde_json::json!({
                "ok": false,
                "message": other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = ApiError::validation("User needs Password").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "User needs Password");
        assert!(json.get("err").is_none());
    }

    #[tokio::test]
    async fn test_store_error_carries_detail() {
        let response = ApiError::store("Error loading Users", "connection reset").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "Error loading Users");
        assert_eq!(json["err"], "connection reset");
    }
}
