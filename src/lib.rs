//! Userhub - User Account REST API
//!
//! A small REST API for user account management: CRUD operations on a user
//! resource, bcrypt password hashing, and stateless token authentication.
//!
//! # Overview
//!
//! Two cooperating core pieces sit in front of conventional CRUD handlers:
//!
//! - **Token service** (`auth::tokens`) - issues and validates signed
//!   bearer tokens encoding a user identity claim
//! - **Auth gate** (`middleware::auth`) - validates the `x-Token` header on
//!   protected routes and attaches the resolved identity to the request
//!
//! Control flow: client → auth gate (protected routes) → handler (reads the
//! attached identity, performs a store operation) → JSON envelope response.
//!
//! # Module Structure
//!
//! - **`auth`** - Token service, login and refresh handlers
//! - **`users`** - User model, store interface + implementations, CRUD handlers
//! - **`middleware`** - The auth gate and the `AuthUser` extractor
//! - **`routes`** - Router assembly and public/protected route split
//! - **`server`** - App state, configuration, initialization
//! - **`error`** - Error taxonomy and JSON envelope conversion
//!
//! # Response Format
//!
//! Every endpoint answers with the envelope `{ ok, message, ...payload }`.
//! User records are embedded only in sanitized form; the password hash
//! never leaves the store layer.

/// Authentication: token service and token endpoints
pub mod auth;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// User resource: model, store, handlers
pub mod users;

// Re-export commonly used types
pub use auth::tokens::{Claims, TokenService};
pub use error::ApiError;
pub use middleware::auth::{AuthUser, TOKEN_HEADER};
pub use server::state::AppState;
pub use server::create_app;
pub use users::model::{User, UserPayload};
