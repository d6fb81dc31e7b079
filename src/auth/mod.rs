//! Authentication Module
//!
//! This module handles token issuance and verification plus the HTTP
//! handlers for the token endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── tokens.rs    - Token service (create/check)
//! └── handlers/    - Login and refresh handlers
//! ```
//!
//! # Token Lifecycle
//!
//! Tokens are created on login, registration and update, and are stateless:
//! validity is solely a function of signature and expiry, with no
//! server-side revocation store. A token claim embeds the sanitized user
//! payload, never a password.

/// Token generation and validation
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, refresh_token, AuthEnvelope, LoginRequest};
pub use tokens::{Claims, TokenService};
