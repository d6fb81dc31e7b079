/**
 * Authentication Middleware
 *
 * This module provides the auth gate protecting routes that require a
 * logged-in user. It is a single-pass, per-request filter with exactly two
 * failure exits and one success exit:
 *
 * 1. Extract the token from the `x-Token` header; absent or empty
 *    → 406 "No Token received!" and the request terminates.
 * 2. Validate it with the token service; invalid → 401 "Incorrect Token!"
 *    and the request terminates.
 * 3. Attach the decoded identity to the request extensions and invoke the
 *    next stage in the pipeline.
 *
 * The gate performs no I/O; token verification is pure computation over
 * the token string and the shared secret. No state is retained across
 * requests. Handlers read the identity through the `AuthUser` extractor.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::tokens::TokenService;
use crate::error::types::ApiError;
use crate::server::state::AppState;
use crate::users::model::UserPayload;

/// Request header carrying the bearer token on protected routes.
/// Header lookup is case-insensitive, so `x-Token` matches too.
pub const TOKEN_HEADER: &str = "x-token";

/// Authentication middleware guarding protected routes
///
/// # Arguments
///
/// * `State(tokens)` - Token service extracted from the app state
/// * `request` - Incoming request
/// * `next` - Next stage in the middleware pipeline
///
/// # Errors
///
/// * `406 Not Acceptable` - If the token header is missing or empty
/// * `401 Unauthorized` - If the token fails verification
pub async fn auth_gate(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if token.is_empty() {
        tracing::warn!("Missing {} header", TOKEN_HEADER);
        return ApiError::MissingToken.into_response();
    }

    let claims = match tokens.check_token(token) {
        Some(claims) => claims,
        None => {
            tracing::warn!("Rejected invalid token");
            return ApiError::InvalidToken.into_response();
        }
    };

    // Attach the decoded identity for handlers to read
    request.extensions_mut().insert(claims.user);
    next.run(request).await
}

/// Extractor for the identity attached by `auth_gate`
///
/// Use as a handler parameter on protected routes:
///
/// ```rust,ignore
/// async fn get_me(AuthUser(user): AuthUser) -> Json<UserEnvelope> { ... }
/// ```
///
/// Rejects with 401 if the middleware did not run, which only happens when
/// a handler using this extractor is wired onto an unprotected route.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserPayload);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<UserPayload>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("AuthUser used on a route without the auth gate");
                ApiError::InvalidToken
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Json, Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::users::memory::MemoryUserStore;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MemoryUserStore::new()),
            TokenService::new("test-secret"),
        )
    }

    /// Protected probe that echoes the attached identity
    async fn echo_identity(AuthUser(user): AuthUser) -> Json<UserPayload> {
        Json(user)
    }

    fn protected_router(state: AppState) -> Router {
        Router::new()
            .route("/probe", get(echo_identity))
            .route_layer(from_fn_with_state(state.clone(), auth_gate))
            .with_state(state)
    }

    fn sample_payload() -> UserPayload {
        UserPayload {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            avatar: Some("http://example.com/a.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_missing_token_yields_406() {
        let app = protected_router(test_state());

        let response = app
            .oneshot(HttpRequest::get("/probe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "No Token received!");
    }

    #[tokio::test]
    async fn test_empty_token_yields_406() {
        let app = protected_router(test_state());

        let response = app
            .oneshot(
                HttpRequest::get("/probe")
                    .header(TOKEN_HEADER, "")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[tokio::test]
    async fn test_invalid_token_yields_401() {
        let app = protected_router(test_state());

        let response = app
            .oneshot(
                HttpRequest::get("/probe")
                    .header(TOKEN_HEADER, "not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Incorrect Token!");
    }

    #[tokio::test]
    async fn test_mistakenly_signed_token_yields_401() {
        let state = test_state();
        let app = protected_router(state);

        let other_issuer = TokenService::new("some-other-secret");
        let token = other_issuer.create_token(&sample_payload()).unwrap();

        let response = app
            .oneshot(
                HttpRequest::get("/probe")
                    .header(TOKEN_HEADER, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_attaches_identity() {
        let state = test_state();
        let payload = sample_payload();
        let token = state.tokens.create_token(&payload).unwrap();
        let app = protected_router(state);

        let response = app
            .oneshot(
                HttpRequest::get("/probe")
                    .header(TOKEN_HEADER, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let echoed: UserPayload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(echoed, payload);
    }

    #[tokio::test]
    async fn test_header_name_is_case_insensitive() {
        let state = test_state();
        let token = state.tokens.create_token(&sample_payload()).unwrap();
        let app = protected_router(state);

        let response = app
            .oneshot(
                HttpRequest::get("/probe")
                    .header("x-Token", token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
