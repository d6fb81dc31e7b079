/**
 * Refresh Token Handler
 *
 * This module implements GET /api/auth/refresh, which re-issues a token
 * for the authenticated identity.
 *
 * The identity comes from the validated token the auth gate attached, not
 * from the request body, so a client can only ever refresh a token for
 * itself.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::AuthEnvelope;
use crate::error::types::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Refresh token handler
///
/// # Errors
///
/// * `500 Internal Server Error` - If signing fails
pub async fn refresh_token(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<AuthEnvelope>, ApiError> {
    let token = state
        .tokens
        .create_token(&user)
        .map_err(|e| ApiError::store("Error creating Token", e))?;

    tracing::debug!("Refreshed token for user: {}", user.id);

    Ok(Json(AuthEnvelope::new("Refresh Token", user, token)))
}
