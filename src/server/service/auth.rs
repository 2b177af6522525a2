//! Login and admin bootstrap.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminBootstrap,
    data::customer_account::CustomerAccountRepository,
    error::{auth::AuthError, AppError},
    model::customer_account::{CustomerAccount, LoginParam, Role},
    util::{
        password::{hash_password, verify_password},
        token::{IssuedToken, TokenCodec},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenCodec,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenCodec) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok((CustomerAccount, IssuedToken))` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(
        &self,
        param: LoginParam,
    ) -> Result<(CustomerAccount, IssuedToken), AppError> {
        let account = CustomerAccountRepository::new(self.db)
            .find_by_username(&param.username)
            .await?;

        let Some(account) = account else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(&param.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&account)?;

        tracing::debug!("Customer account {} logged in", account.id);

        Ok((account, token))
    }
}

/// Ensures at least one admin account exists.
///
/// When no admin exists and bootstrap credentials are configured, the named account is
/// created as an admin. An account already holding that username is promoted only if
/// the configured password verifies against it; otherwise an error is logged and roles
/// are left unchanged. Without credentials a warning is logged and admin-only routes
/// stay unreachable until an admin is added.
pub async fn ensure_admin(
    db: &DatabaseConnection,
    bootstrap: Option<&AdminBootstrap>,
) -> Result<(), AppError> {
    let repo = CustomerAccountRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(());
    }

    let Some(bootstrap) = bootstrap else {
        tracing::warn!(
            "No admin account exists; set ADMIN_USERNAME and ADMIN_PASSWORD to create one"
        );
        return Ok(());
    };

    match repo.find_by_username(&bootstrap.username).await? {
        Some(account) if verify_password(&bootstrap.password, &account.password_hash) => {
            repo.set_role(account.id, Role::Admin).await?;
            tracing::info!("Promoted customer account {} to admin", account.id);
        }
        Some(account) => {
            tracing::error!(
                "ADMIN_USERNAME {} belongs to customer account {} whose password does not match \
                 ADMIN_PASSWORD; not promoting it",
                bootstrap.username,
                account.id
            );
        }
        None => {
            let account = repo
                .create(
                    bootstrap.username.clone(),
                    format!("{}@localhost.localdomain", bootstrap.username),
                    bootstrap.username.clone(),
                    hash_password(&bootstrap.password)?,
                    Role::Admin,
                )
                .await?;
            tracing::info!("Created admin account {}", account.id);
        }
    }

    Ok(())
}
