/**
 * API Route Handlers
 *
 * This module wires the user and auth endpoints onto the router and draws
 * the line between public and protected routes.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/users` - Registration (issues a token)
 * - `POST /api/auth/login` - Login (issues a token)
 *
 * ## Protected (behind the auth gate, `x-Token` header required)
 * - `GET /api/users` - List users
 * - `GET /api/users/me` - Current user
 * - `PUT /api/users/me` - Update current user
 * - `DELETE /api/users/me` - Delete current user
 * - `GET /api/users/{id}` - User by id
 * - `GET /api/auth/refresh` - Re-issue token
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::auth::handlers::{login, refresh_token};
use crate::middleware::auth::auth_gate;
use crate::server::state::AppState;
use crate::users::handlers::{
    create_user, delete_me, get_me, get_user_by_id, list_users, update_me,
};

/// Configure API routes
///
/// Protected routes get the auth gate as a route layer; merging afterwards
/// keeps the public routes outside it.
///
/// # Arguments
///
/// * `state` - Application state, also handed to the middleware
///
/// # Returns
///
/// Router with all API routes configured
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/users", get(list_users))
        .route(
            "/api/users/me",
            get(get_me).put(update_me).delete(delete_me),
        )
        .route("/api/users/{id}", get(get_user_by_id))
        .route("/api/auth/refresh", get(refresh_token))
        .route_layer(from_fn_with_state(state.clone(), auth_gate));

    let public = Router::new()
        .route("/api/users", post(create_user))
        .route("/api/auth/login", post(login));

    protected.merge(public)
}
