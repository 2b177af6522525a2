//! Password hashing for customer accounts.
//!
//! Stored hashes are Argon2id PHC strings (`$argon2id$v=19$...`) carrying their own
//! parameters and salt, so verification keeps working if the defaults change.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::internal::InternalError;

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks a password against a stored PHC hash.
///
/// Returns `false` for malformed stored hashes rather than erroring.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
