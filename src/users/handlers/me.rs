/**
 * Get Current User Handler
 *
 * Implements GET /api/users/me. Returns the identity the auth gate
 * attached to the request; no store lookup is needed because the token
 * already carries the sanitized user record.
 */

use axum::response::Json;

use crate::middleware::auth::AuthUser;
use crate::users::handlers::types::UserEnvelope;

/// Get current user handler
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserEnvelope> {
    Json(UserEnvelope::new("User by Token", user))
}
