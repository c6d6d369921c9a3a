//! Password hashing and password reset tokens.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::server::error::AppError;

const RESET_TOKEN_BYTES: usize = 20;

/// Hashes a password with bcrypt on the blocking thread pool.
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(Into::into)
}

/// Checks a password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::HashErr)` - Stored hash is malformed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(Into::into)
}

/// Generates a password reset token.
///
/// # Returns
/// - `(token, digest)` - Hex encoded random token to email to the user, and the SHA-256
///   digest of it to store
pub fn generate_reset_token() -> (String, String) {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    let token = hex::encode(bytes);
    let digest = digest_reset_token(&token);
    (token, digest)
}

/// SHA-256 hex digest of a reset token.
pub fn digest_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
