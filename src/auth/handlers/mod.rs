//! Authentication Handlers Module
//!
//! HTTP handlers for the token endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/auth/login - Verify credentials, issue a token
//! - **`refresh_token`** - GET /api/auth/refresh - Re-issue a token for the
//!   authenticated identity
//!
//! # Security
//!
//! - Passwords are verified with bcrypt
//! - Invalid credentials return 401 with one shared message (no
//!   information leakage)
//! - Refresh only ever signs the identity the auth gate attached

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Refresh token handler
pub mod refresh;

// Re-export commonly used types
pub use types::{AuthEnvelope, LoginRequest};

// Re-export handlers
pub use login::login;
pub use refresh::refresh_token;
