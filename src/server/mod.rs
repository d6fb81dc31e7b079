//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading (store)
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user store behind an `Arc` and the token service.
//! Both are read-only after startup; requests are handled independently
//! with no shared mutable state and therefore no locking.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
