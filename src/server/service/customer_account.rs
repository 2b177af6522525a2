//! Customer account service for business logic.
//!
//! This module provides the `CustomerAccountService` which owns registration and
//! credential changes: it hashes passwords before they reach the repository and
//! enforces username uniqueness, reporting conflicts as field errors.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::customer_account::CustomerAccountRepository,
    error::{validation::ValidationErrors, AppError},
    model::{
        customer_account::{
            CreateCustomerAccountParam, CustomerAccount, Role, UpdateCredentialsParam,
        },
        page::{Page, PageParam},
    },
    util::password::hash_password,
};

const USERNAME_TAKEN: &str = "Username is already taken.";

/// Service providing business logic for customer accounts.
pub struct CustomerAccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerAccountService<'a> {
    /// Creates a new CustomerAccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomerAccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account with the `user` role.
    ///
    /// # Arguments
    /// - `param` - Validated registration fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(CustomerAccount)` - The created account
    /// - `Err(AppError::Validation)` - The username is already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateCustomerAccountParam,
    ) -> Result<CustomerAccount, AppError> {
        let repo = CustomerAccountRepository::new(self.db);

        if repo.username_taken(&param.username, None).await? {
            return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
        }

        let password_hash = hash_password(&param.password)?;

        let account = repo
            .create(
                param.name,
                param.email,
                param.username,
                password_hash,
                Role::User,
            )
            .await
            .map_err(username_conflict)?;

        tracing::info!("Registered customer account {}", account.id);

        Ok(account)
    }

    /// Retrieves an account by ID.
    ///
    /// # Returns
    /// - `Ok(CustomerAccount)` - Account found
    /// - `Err(AppError::NotFound)` - No account with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<CustomerAccount, AppError> {
        CustomerAccountRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves a page of accounts ordered by ID.
    pub async fn get_all(&self, param: PageParam) -> Result<Page<CustomerAccount>, AppError> {
        let (items, total) = CustomerAccountRepository::new(self.db)
            .get_paginated(param.page, param.per_page)
            .await?;

        Ok(Page {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
        })
    }

    /// Replaces the username and/or password of an account.
    ///
    /// # Returns
    /// - `Ok(CustomerAccount)` - The updated account
    /// - `Err(AppError::NotFound)` - No account with that ID
    /// - `Err(AppError::Validation)` - The new username belongs to another account
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_credentials(
        &self,
        id: i32,
        param: UpdateCredentialsParam,
    ) -> Result<CustomerAccount, AppError> {
        let repo = CustomerAccountRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(username) = &param.username {
            if repo.username_taken(username, Some(id)).await? {
                return Err(ValidationErrors::single("username", USERNAME_TAKEN).into());
            }
        }

        let password_hash = param.password.as_deref().map(hash_password).transpose()?;

        let account = repo
            .update_credentials(id, param.username, password_hash)
            .await
            .map_err(username_conflict)?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Updated credentials for customer account {}", account.id);

        Ok(account)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer account {} not found", id))
}

/// Maps a unique violation lost to a concurrent registration onto the username field.
fn username_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationErrors::single("username", USERNAME_TAKEN).into()
        }
        _ => err.into(),
    }
}
