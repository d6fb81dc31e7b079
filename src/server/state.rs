/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * The state is cheap to clone per request: the store is behind an `Arc`
 * and the token service only holds read-only key material. Nothing in the
 * state is mutable after startup, so no locking is needed here.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::tokens::TokenService;
use crate::users::store::UserStore;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistent user store (PostgreSQL, or in-memory fallback)
    pub store: Arc<dyn UserStore>,

    /// Token issuer/verifier holding the process-wide signing secret
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }
}

/// Allow handlers and middleware to extract the token service directly
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Allow handlers to extract the user store directly
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
