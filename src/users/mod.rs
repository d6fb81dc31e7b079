//! Users Module
//!
//! This module owns the user resource: the data model, the store interface
//! with its PostgreSQL and in-memory implementations, and the HTTP handlers
//! for the CRUD endpoints.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports and documentation
//! ├── model.rs     - User record and sanitized payload
//! ├── store.rs     - UserStore trait and error union
//! ├── postgres.rs  - PostgreSQL store implementation
//! ├── memory.rs    - In-memory store implementation
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Password Invariant
//!
//! Stored records carry a bcrypt hash; everything that leaves the server
//! goes through `UserPayload`, which has no password field.

/// User record and sanitized payload
pub mod model;

/// Store interface and error union
pub mod store;

/// PostgreSQL store implementation
pub mod postgres;

/// In-memory store implementation
pub mod memory;

/// HTTP handlers for user endpoints
pub mod handlers;

// Re-export commonly used types
pub use memory::MemoryUserStore;
pub use model::{User, UserPayload};
pub use postgres::PgUserStore;
pub use store::{NewUser, StoreError, UserChanges, UserStore};
