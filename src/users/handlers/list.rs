/**
 * List Users Handler
 *
 * Implements GET /api/users. Returns every user as a sanitized payload.
 */

use axum::{extract::State, response::Json};

use crate::error::types::ApiError;
use crate::server::state::AppState;
use crate::users::handlers::types::UsersEnvelope;
use crate::users::model::UserPayload;

/// List users handler
///
/// # Errors
///
/// * `500 Internal Server Error` - If the store listing fails
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersEnvelope>, ApiError> {
    let users = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::store("Error loading Users", e))?;

    let payloads: Vec<UserPayload> = users.iter().map(UserPayload::from).collect();
    Ok(Json(UsersEnvelope::new("Users", payloads)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tokens::TokenService;
    use crate::users::memory::MemoryUserStore;
    use crate::users::store::{NewUser, UserStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_users_returns_sanitized_payloads() {
        let store = Arc::new(MemoryUserStore::new());
        store
            .create(NewUser {
                name: "Test User".to_string(),
                email: "a@example.com".to_string(),
                avatar: None,
                password_hash: "super-secret-hash".to_string(),
            })
            .await
            .unwrap();
        let state = AppState::new(store, TokenService::new("test-secret"));

        let response = list_users(State(state)).await.unwrap();
        assert!(response.ok);
        assert_eq!(response.message, "Users");
        assert_eq!(response.users.len(), 1);

        let json = serde_json::to_value(&response.0).unwrap();
        assert!(!json.to_string().contains("super-secret-hash"));
    }

    #[tokio::test]
    async fn test_list_users_empty_store() {
        let state = AppState::new(
            Arc::new(MemoryUserStore::new()),
            TokenService::new("test-secret"),
        );

        let response = list_users(State(state)).await.unwrap();
        assert!(response.users.is_empty());
    }
}
