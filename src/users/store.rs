/**
 * User Store Interface
 *
 * This module defines the store interface the handlers are written against,
 * together with its input and error types. Two implementations exist:
 * `PgUserStore` (PostgreSQL via sqlx) and `MemoryUserStore` (HashMap, used
 * for local development without a database and in tests).
 *
 * # Error Union
 *
 * `StoreError` distinguishes the email uniqueness violation (mapped to
 * 409 Conflict by handlers) from backend failures (mapped to 500).
 */

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::users::model::User;

/// Store-level error union
#[derive(Debug, Error)]
pub enum StoreError {
    /// Email uniqueness constraint violated
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Input for creating a user
///
/// The password arrives here already hashed; handlers perform the bcrypt
/// hashing before touching the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub password_hash: String,
}

/// Fields an update may change
///
/// The password hash is not updatable through this path; the original
/// contract only updates name, email and avatar.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Persistent collection of user records, addressable by id and by email
///
/// All operations are single round trips with no retries; every failure is
/// surfaced to the caller as a `StoreError`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List all users
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a user, assigning a fresh id
    ///
    /// Returns `StoreError::DuplicateEmail` if the email is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Update name, email and avatar of an existing user
    ///
    /// Returns `Ok(None)` if no user with the given id exists, and
    /// `StoreError::DuplicateEmail` if the new email belongs to another user.
    async fn update(&self, id: Uuid, changes: UserChanges) -> Result<Option<User>, StoreError>;

    /// Delete a user, returning the removed record
    ///
    /// Returns `Ok(None)` if no user with the given id exists.
    async fn delete(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}
