//! User Handlers Module
//!
//! HTTP handlers for the user CRUD endpoints.
//!
//! # Handlers
//!
//! - **`list_users`** - GET /api/users - List users
//! - **`get_me`** - GET /api/users/me - Current user from the attached identity
//! - **`get_user_by_id`** - GET /api/users/{id} - User by id
//! - **`create_user`** - POST /api/users - Registration
//! - **`update_me`** - PUT /api/users/me - Update the current user
//! - **`delete_me`** - DELETE /api/users/me - Delete the current user
//!
//! All handlers except `create_user` sit behind the auth gate and read the
//! caller's identity through the `AuthUser` extractor.

/// Request and response types
pub mod types;

/// List users handler
pub mod list;

/// Get current user handler
pub mod me;

/// Get user by id handler
pub mod by_id;

/// Create user handler
pub mod create;

/// Update current user handler
pub mod update;

/// Delete current user handler
pub mod delete;

// Re-export commonly used types
pub use types::{CreateUserRequest, UpdateUserRequest, UserEnvelope, UsersEnvelope};

// Re-export handlers
pub use by_id::get_user_by_id;
pub use create::create_user;
pub use delete::delete_me;
pub use list::list_users;
pub use me::get_me;
pub use update::update_me;
