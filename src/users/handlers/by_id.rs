/**
 * Get User By Id Handler
 *
 * Implements GET /api/users/{id}. An unknown id is reported as a 400 with
 * the id echoed in the message, matching the rest of the not-found
 * contract.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::error::types::ApiError;
use crate::server::state::AppState;
use crate::users::handlers::types::UserEnvelope;
use crate::users::model::UserPayload;

/// Get user by id handler
///
/// # Errors
///
/// * `400 Bad Request` - If no user with the given id exists
/// * `500 Internal Server Error` - If the store lookup fails
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::store("Error loading User by Id", e))?
        .ok_or_else(|| {
            ApiError::not_found(format!("User with Id {} doesn't exist", id))
        })?;

    Ok(Json(UserEnvelope::new("User by Id", UserPayload::from(user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tokens::TokenService;
    use crate::users::memory::MemoryUserStore;
    use crate::users::store::{NewUser, UserStore};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_user_by_id_success() {
        let store = Arc::new(MemoryUserStore::new());
        let user = store
            .create(NewUser {
                name: "Test User".to_string(),
                email: "a@example.com".to_string(),
                avatar: None,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let state = AppState::new(store, TokenService::new("test-secret"));

        let response = get_user_by_id(State(state), Path(user.id)).await.unwrap();
        assert_eq!(response.message, "User by Id");
        assert_eq!(response.user.id, user.id);
    }

    #[tokio::test]
    async fn test_get_user_by_unknown_id() {
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            TokenService::new("test-secret"),
        );

        let id = Uuid::new_v4();
        let err = get_user_by_id(State(state), Path(id)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
