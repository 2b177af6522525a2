//! Customer account data repository for database operations.
//!
//! This module provides the `CustomerAccountRepository` for managing account records:
//! registration, lookups by ID and username, credential updates and role management.
//! Password hashing happens in the service layer; this repository only stores hashes.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::customer_account::{CustomerAccount, Role};

/// Repository providing database operations for customer accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading and updating account records.
pub struct CustomerAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerAccountRepository<'a> {
    /// Creates a new CustomerAccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CustomerAccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Contact address
    /// - `username` - Unique login name
    /// - `password_hash` - Already hashed password
    /// - `role` - Role to grant
    ///
    /// # Returns
    /// - `Ok(CustomerAccount)` - The created account
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(
        &self,
        name: String,
        email: String,
        username: String,
        password_hash: String,
        role: Role,
    ) -> Result<CustomerAccount, DbErr> {
        let entity = entity::customer_account::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CustomerAccount::from_entity(entity))
    }

    /// Finds an account by ID.
    ///
    /// # Returns
    /// - `Ok(Some(CustomerAccount))` - Account found
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CustomerAccount>, DbErr> {
        let entity = entity::prelude::CustomerAccount::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(CustomerAccount::from_entity))
    }

    /// Finds an account by its exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<CustomerAccount>, DbErr> {
        let entity = entity::prelude::CustomerAccount::find()
            .filter(entity::customer_account::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(CustomerAccount::from_entity))
    }

    /// Checks whether a username belongs to an account other than `except`.
    ///
    /// # Arguments
    /// - `username` - Username to look up
    /// - `except` - Account ID to ignore, used when an account keeps its own username
    ///
    /// # Returns
    /// - `Ok(true)` - Another account already uses the username
    /// - `Ok(false)` - The username is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn username_taken(&self, username: &str, except: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::CustomerAccount::find()
            .filter(entity::customer_account::Column::Username.eq(username));
        if let Some(id) = except {
            query = query.filter(entity::customer_account::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all accounts with pagination, ordered by ID.
    ///
    /// # Returns
    /// - `Ok((accounts, total))` - Accounts for the requested page and total account count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<CustomerAccount>, u64), DbErr> {
        let paginator = entity::prelude::CustomerAccount::find()
            .order_by_asc(entity::customer_account::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities
                .into_iter()
                .map(CustomerAccount::from_entity)
                .collect(),
            total,
        ))
    }

    /// Replaces the username and/or password hash of an account.
    ///
    /// # Returns
    /// - `Ok(Some(CustomerAccount))` - The updated account
    /// - `Ok(None)` - No account with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_credentials(
        &self,
        id: i32,
        username: Option<String>,
        password_hash: Option<String>,
    ) -> Result<Option<CustomerAccount>, DbErr> {
        let Some(existing) = entity::prelude::CustomerAccount::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(username) = username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(CustomerAccount::from_entity(entity)))
    }

    /// Checks if any admin account exists.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one account has the admin role
    /// - `Ok(false)` - No admin accounts exist (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::CustomerAccount::find()
            .filter(entity::customer_account::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Sets the role of an account.
    ///
    /// # Returns
    /// - `Ok(())` - Role updated (or no matching account found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::CustomerAccount::update_many()
            .filter(entity::customer_account::Column::Id.eq(id))
            .col_expr(
                entity::customer_account::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
