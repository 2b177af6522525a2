//! Signing and verification of bearer access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::customer_account::CustomerAccount,
};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Customer account ID as a string.
    pub sub: String,
    /// Role at the time of issuance; the guard re-reads the role from the database.
    pub role: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl Claims {
    /// Parses the subject claim back into an account ID.
    ///
    /// A signed token with a non-numeric subject is rejected as invalid.
    pub fn account_id(&self) -> Result<i32, AuthError> {
        self.sub.parse::<i32>().map_err(|_| {
            AuthError::InvalidToken(format!("Token subject {:?} is not an account ID", self.sub))
        })
    }
}

/// A freshly signed token and its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: Duration,
}

/// HS256 token codec shared through application state.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs a token for the account valid for the configured lifetime.
    pub fn issue(&self, account: &CustomerAccount) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.id.to_string(),
            role: account.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = self.sign(&claims)?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl,
        })
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        let token = encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(InternalError::TokenEncoding)?;
        Ok(token)
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(data.claims)
    }
}
