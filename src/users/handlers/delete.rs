/**
 * Delete Current User Handler
 *
 * Implements DELETE /api/users/me. The authenticated user removes their
 * own account; the response returns the removed record so the client can
 * confirm what was deleted.
 */

use axum::{extract::State, response::Json};

use crate::error::types::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::users::handlers::types::UserEnvelope;
use crate::users::model::UserPayload;

/// Delete current user handler
///
/// # Errors
///
/// * `400 Bad Request` - If the user no longer exists
/// * `500 Internal Server Error` - If the store delete fails
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .store
        .delete(identity.id)
        .await
        .map_err(|e| ApiError::store("Error Deleting User", e))?
        .ok_or_else(|| {
            ApiError::not_found(format!("User with Id {} doesn't exist", identity.id))
        })?;

    tracing::info!("User deleted: {}", user.id);

    Ok(Json(UserEnvelope::new(
        "Deleted User",
        UserPayload::from(user),
    )))
}
