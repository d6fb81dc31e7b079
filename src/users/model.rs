/**
 * User Model
 *
 * This module defines the user record as stored in the database and the
 * sanitized payload shape that is allowed to leave the server.
 *
 * # Password Invariant
 *
 * The stored record carries a bcrypt `password_hash`. Any response body or
 * token claim uses `UserPayload`, which has no password field at all, so a
 * hash can never be serialized to a client by construction.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, store-assigned)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Avatar URL (optional)
    pub avatar: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// User payload (without sensitive data)
///
/// The only user shape that may appear in a response body or inside a
/// token claim. Does not include the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// Avatar URL (optional)
    pub avatar: Option<String>,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}
