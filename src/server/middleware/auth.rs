use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer_account::CustomerAccountRepository,
    error::{auth::AuthError, AppError},
    model::customer_account::CustomerAccount,
    util::token::TokenCodec,
};

pub enum Permission {
    /// Account must have the admin role.
    Admin,
    /// Account must be the given account, or an admin.
    Account(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCodec,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenCodec, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request's bearer token and checks every permission.
    ///
    /// The role is read from the database rather than the token, so demotions apply to
    /// tokens issued before them.
    ///
    /// # Returns
    /// - `Ok(CustomerAccount)` - Authenticated account holding every permission
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token failed verification
    /// - `Err(AuthError::AccountNotFound)` - Token account no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<CustomerAccount, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;
        let account_id = claims.account_id()?;

        let Some(account) = CustomerAccountRepository::new(self.db)
            .find_by_id(account_id)
            .await?
        else {
            return Err(AuthError::AccountNotFound(account_id).into());
        };

        ensure_permissions(&account, permissions)?;

        Ok(account)
    }
}

/// Checks an already authenticated account against a set of permissions.
///
/// Used directly when the owning account is only known after loading the resource.
pub fn ensure_permissions(
    account: &CustomerAccount,
    permissions: &[Permission],
) -> Result<(), AuthError> {
    if account.is_admin() {
        return Ok(());
    }

    for permission in permissions {
        match permission {
            Permission::Admin => {
                return Err(AuthError::AccessDenied(
                    account.id,
                    "Account attempted an admin-only operation without the admin role"
                        .to_string(),
                ));
            }
            Permission::Account(owner_id) => {
                if account.id != *owner_id {
                    return Err(AuthError::AccessDenied(
                        account.id,
                        format!("Account attempted to access resources of account {}", owner_id),
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
