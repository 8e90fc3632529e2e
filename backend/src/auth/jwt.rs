//! JWT token generation and validation
//!
//! HS256 access and refresh tokens signed with keys derived once at startup.
//! The subject claim carries the user id as a string; JWT libraries
//! (ours included) reject non-string subjects.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Kind of token, stored in the `token_type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id, always a string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub token_type: TokenType,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}

/// Pre-computed signing keys, shared through `Arc`
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Create once at startup and keep in `AppState`; cloning is cheap.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_token_expiry_secs: i64,
    refresh_token_expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }

    /// Generate an access token for a user
    #[inline]
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, TokenType::Access, self.access_token_expiry_secs)
    }

    /// Generate a refresh token for a user
    #[inline]
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, TokenType::Refresh, self.refresh_token_expiry_secs)
    }

    fn generate_token(&self, user_id: Uuid, token_type: TokenType, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate {:?} token: {}", token_type, e))
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Validate an access token specifically
    #[inline]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        self.validate_typed(token, TokenType::Access)
    }

    /// Validate a refresh token specifically
    #[inline]
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims> {
        self.validate_typed(token, TokenType::Refresh)
    }

    fn validate_typed(&self, token: &str, expected: TokenType) -> Result<Claims> {
        let claims = self.validate_token(token)?;
        if claims.token_type != expected {
            return Err(anyhow::anyhow!("Not an {:?} token", expected));
        }
        Ok(claims)
    }

    /// Get access token expiry in seconds
    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_secs
    }
}
