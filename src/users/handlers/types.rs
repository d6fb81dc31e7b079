/**
 * User Handler Types
 *
 * Request and response types for the user CRUD endpoints. Every response
 * uses the `{ ok, message, ...payload }` envelope and embeds users only as
 * the sanitized `UserPayload`.
 */

use serde::{Deserialize, Serialize};

use crate::users::model::UserPayload;

/// Create user request
///
/// The password is optional at the type level so its absence can be
/// reported as a 400 validation error rather than a deserialization
/// failure.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Avatar URL (optional)
    #[serde(default)]
    pub avatar: Option<String>,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: Option<String>,
}

/// Update user request
///
/// The password is not updatable through this endpoint. An absent avatar
/// keeps the one from the authenticated identity.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateUserRequest {
    /// New display name (must be non-empty)
    pub name: String,
    /// New email address (must be non-empty and unique)
    pub email: String,
    /// New avatar URL (optional)
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Envelope for a single user
#[derive(Serialize, Debug)]
pub struct UserEnvelope {
    pub ok: bool,
    pub message: String,
    pub user: UserPayload,
}

impl UserEnvelope {
    pub fn new(message: impl Into<String>, user: UserPayload) -> Self {
        Self {
            ok: true,
            message: message.into(),
            user,
        }
    }
}

/// Envelope for the user listing
#[derive(Serialize, Debug)]
pub struct UsersEnvelope {
    pub ok: bool,
    pub message: String,
    pub users: Vec<UserPayload>,
}

impl UsersEnvelope {
    pub fn new(message: impl Into<String>, users: Vec<UserPayload>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            users,
        }
    }
}
