/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password using bcrypt
 * 3. Generate a token
 * 4. Return token and sanitized user info
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message to
 *   prevent user enumeration
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthEnvelope, LoginRequest};
use crate::error::types::ApiError;
use crate::server::state::AppState;
use crate::users::model::UserPayload;

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (store + token service)
/// * `Json(request)` - Login request containing email and password
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is empty
/// * `401 Unauthorized` - If the user is unknown or the password is wrong
/// * `500 Internal Server Error` - If the store lookup or signing fails
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthEnvelope>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("User needs Email, Password"));
    }

    tracing::info!("Login request for: {}", request.email);

    let user = state
        .store
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::store("Error loading User", e))?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::BadCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::store("Error verifying Password", e))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(ApiError::BadCredentials);
    }

    let payload = UserPayload::from(user);
    let token = state
        .tokens
        .create_token(&payload)
        .map_err(|e| ApiError::store("Error creating Token", e))?;

    tracing::info!("User logged in: {}", payload.email);

    Ok(Json(AuthEnvelope::new("Login", payload, token)))
}
