/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: store loading, token service construction, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Load the user store (PostgreSQL, or in-memory fallback)
 * 2. Build the token service from `JWT_SECRET`
 * 3. Create the app state and router
 *
 * The signing secret is read once here and is read-only for the lifetime
 * of the process.
 */

use axum::Router;

use crate::auth::tokens::TokenService;
use crate::routes::router::create_router;
use crate::server::config::load_store;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing userhub server");

    let store = load_store().await;
    let tokens = TokenService::from_env();

    let app_state = AppState::new(store, tokens);

    tracing::info!("Router configured");

    create_router(app_state)
}
