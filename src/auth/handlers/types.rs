/**
 * Authentication Handler Types
 *
 * Request and response types for the login and refresh endpoints. The
 * `AuthEnvelope` is shared with the user create/update handlers, which also
 * issue a fresh token.
 */

use serde::{Deserialize, Serialize};

use crate::users::model::UserPayload;

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Envelope for responses that carry a fresh token
///
/// Returned by login, refresh, create and update. The embedded user is the
/// sanitized payload; it never contains a password field.
#[derive(Serialize, Debug)]
pub struct AuthEnvelope {
    pub ok: bool,
    pub message: String,
    pub user: UserPayload,
    pub token: String,
}

impl AuthEnvelope {
    pub fn new(message: impl Into<String>, user: UserPayload, token: String) -> Self {
        Self {
            ok: true,
            message: message.into(),
            user,
            token,
        }
    }
}
