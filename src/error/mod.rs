//! Error Module
//!
//! This module defines the error type handlers return and its conversion
//! into the JSON error envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! All errors become `{ ok: false, message, ... }` with the status code
//! from the taxonomy: 406 missing token, 401 bad token/credentials,
//! 400 validation/not-found, 409 uniqueness conflict, 500 store failure.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
