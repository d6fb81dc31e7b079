/**
 * Token Service
 *
 * This module handles JWT token generation and validation for user sessions.
 *
 * # Contract
 *
 * - `create_token` signs a claim object carrying the sanitized user payload
 *   and an expiration timestamp. The payload type has no password field, so
 *   a password hash can never be embedded in a token.
 * - `check_token` returns `Some(Claims)` only for a well-formed token signed
 *   with this service's secret that has not expired. Every failure mode
 *   (empty, malformed, expired, signature mismatch) collapses to `None`;
 *   callers treat `None` as "unauthenticated" and never see an error.
 *
 * The secret and expiry window are fixed when the service is constructed
 * and are read-only afterwards, so the service can be cloned freely into
 * per-request contexts without locking.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::users::model::UserPayload;

/// Default token lifetime: 30 days
const DEFAULT_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity claim: the user record without its password
    pub user: UserPayload,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Stateless token issuer and verifier sharing one HS256 secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenService {
    /// Create a token service with the default 30-day expiry
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, DEFAULT_TTL_SECS)
    }

    /// Create a token service with an explicit expiry window in seconds
    pub fn with_ttl(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
            ttl_secs,
        }
    }

    /// Build the service from the `JWT_SECRET` environment variable
    ///
    /// Falls back to a development secret with a warning when the variable
    /// is not set, matching how the rest of the configuration degrades.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development secret");
            "your-secret-key-change-in-production".to_string()
        });
        Self::new(&secret)
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `user` - Sanitized user payload to embed as the identity claim
    ///
    /// # Returns
    /// Signed token string, or an error if signing fails
    pub fn create_token(
        &self,
        user: &UserPayload,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let claims = Claims {
            user: user.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// # Arguments
    /// * `token` - Opaque token string taken from the request header
    ///
    /// # Returns
    /// Decoded claims, or `None` if the token is empty, malformed, expired,
    /// or signed with a different secret. This never surfaces an error to
    /// the caller; an absent result means "unauthenticated".
    pub fn check_token(&self, token: &str) -> Option<Claims> {
        if token.is_empty() {
            return None;
        }

        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e);
                None
            }
        }
    }
}
