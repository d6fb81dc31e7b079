/**
 * Update Current User Handler
 *
 * This module implements PUT /api/users/me. The authenticated user updates
 * their own name, email and avatar; the target id always comes from the
 * attached identity, never from the body.
 *
 * An absent avatar in the request keeps the avatar from the identity. The
 * handler issues a fresh token on success so the client's identity claim
 * stays in sync with the stored record.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::AuthEnvelope;
use crate::error::types::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::handlers::types::UpdateUserRequest;
use crate::users::model::UserPayload;
use crate::users::store::{StoreError, UserChanges};

/// Update current user handler
///
/// # Errors
///
/// * `400 Bad Request` - If name or email is empty (the stored record is
///   left unchanged), or if the user no longer exists
/// * `409 Conflict` - If the new email belongs to another user
/// * `500 Internal Server Error` - If the store update or signing fails
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<(StatusCode, Json<AuthEnvelope>), ApiError> {
    if request.name.is_empty() || request.email.is_empty() {
        return Err(ApiError::validation("User needs Name, Email"));
    }

    let changes = UserChanges {
        name: request.name,
        email: request.email,
        avatar: request.avatar.or(identity.avatar),
    };

    let user = state
        .store
        .update(identity.id, changes)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail(_) => {
                ApiError::conflict("Error updating User. Email must be unique")
            }
            other => ApiError::store("Error updating User", other),
        })?
        .ok_or_else(|| {
            ApiError::not_found(format!("User with Id {} doesn't exist", identity.id))
        })?;

    let payload = UserPayload::from(user);
    let token = state
        .tokens
        .create_token(&payload)
        .map_err(|e| ApiError::store("Error creating Token", e))?;

    tracing::info!("User updated: {}", payload.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthEnvelope::new("User updated", payload, token)),
    ))
}
