/**
 * Create User Handler
 *
 * This module implements the registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Require a non-empty password
 * 2. Hash the password using bcrypt
 * 3. Create the user in the store
 * 4. Generate a token for immediate authentication
 * 5. Return token and sanitized user info
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt `DEFAULT_COST` before storage
 * - The response embeds the user only as the sanitized payload
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::AuthEnvelope;
use crate::error::types::ApiError;
use crate::server::state::AppState;
use crate::users::handlers::types::CreateUserRequest;
use crate::users::model::UserPayload;
use crate::users::store::{NewUser, StoreError};

/// Create user handler
///
/// # Arguments
///
/// * `State(state)` - Application state (store + token service)
/// * `Json(request)` - Create request with name, email, avatar, password
///
/// # Errors
///
/// * `400 Bad Request` - If the password is missing or empty; nothing is
///   persisted in that case
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If hashing, the store, or signing fails
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<AuthEnvelope>), ApiError> {
    let password = match request.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ApiError::validation("User needs Password")),
    };

    tracing::info!("Create user request for: {}", request.email);

    let password_hash =
        hash(password, DEFAULT_COST).map_err(|e| ApiError::store("Error hashing Password", e))?;

    let user = state
        .store
        .create(NewUser {
            name: request.name,
            email: request.email,
            avatar: request.avatar,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail(_) => {
                ApiError::conflict("Error creating User. Email must be unique")
            }
            other => ApiError::store("Error creating User", other),
        })?;

    let payload = UserPayload::from(user);
    let token = state
        .tokens
        .create_token(&payload)
        .map_err(|e| ApiError::store("Error creating Token", e))?;

    tracing::info!("User created: {} ({})", payload.name, payload.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthEnvelope::new("User created", payload, token)),
    ))
}
