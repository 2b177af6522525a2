use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a freshly issued access token.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// Failure to hash a password for storage.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),

    /// Failure to serialize a response body for the response cache.
    #[error("Failed to serialize response body: {0}")]
    Serialize(#[source] serde_json::Error),
}
