//! JSON Web Token signing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User ID as a string.
    pub sub: String,
    /// Issued at, seconds since the epoch.
    pub iat: i64,
    /// Expiration, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// User ID named by the token.
    ///
    /// # Returns
    /// - `Ok(i32)` - The user ID
    /// - `Err(AuthError::MissingToken)` - Subject is not a numeric ID
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| AuthError::MissingToken)
    }
}

/// Signs and verifies HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expire_days: i64,
}

impl JwtService {
    pub fn new(secret: &str, expire_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expire_days,
        }
    }

    /// Signs a token for a user, valid for the configured number of days.
    ///
    /// # Arguments
    /// - `user_id` - ID stored in the `sub` claim
    ///
    /// # Returns
    /// - `Ok(String)` - The encoded token
    /// - `Err(AppError::InternalError)` - Token could not be encoded
    pub fn create_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::days(self.expire_days);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
