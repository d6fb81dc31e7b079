//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. The auth gate
//! is the only middleware: it validates the bearer token before a request
//! reaches a protected handler.

pub mod auth;

pub use auth::{auth_gate, AuthUser, TOKEN_HEADER};
