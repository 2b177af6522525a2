use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry an `Authorization: Bearer <token>` header.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// Token signature, structure or claims could not be verified.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Token was valid but its expiry time has passed.
    #[error("Access token has expired")]
    TokenExpired,

    /// Token references an account that no longer exists.
    #[error("Account {0} from access token not found in database")]
    AccountNotFound(i32),

    /// Login attempt with an unknown username or wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Authenticated account lacks the permission required for the route.
    ///
    /// # Fields
    /// - ID of the account that was denied
    /// - Reason logged server-side
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or expired tokens, stale accounts and bad credentials
/// - 403 Forbidden - Authenticated account without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication token is missing"),
            Self::InvalidToken(_) | Self::AccountNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication token is invalid")
            }
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Authentication token has expired"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
