//! Customer account factory for creating test account entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customer accounts with customizable fields.
///
/// The default `password_hash` is a placeholder that no password verifies against;
/// tests that log in should supply a real hash through `password_hash()`.
pub struct CustomerAccountFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    username: String,
    password_hash: String,
    admin: bool,
}

impl<'a> CustomerAccountFactory<'a> {
    /// Creates a new CustomerAccountFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Customer {id}"`
    /// - email: `"customer{id}@example.com"`
    /// - username: `"customer{id}"`
    /// - admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            username: format!("customer{}", id),
            password_hash: "unset$unset".to_string(),
            admin: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets whether the account carries the `admin` role.
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer_account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer_account::Model, DbErr> {
        let role = if self.admin { "admin" } else { "user" };

        entity::customer_account::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(role.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular customer account with default values.
pub async fn create_customer_account(
    db: &DatabaseConnection,
) -> Result<entity::customer_account::Model, DbErr> {
    CustomerAccountFactory::new(db).build().await
}

/// Creates an admin account with default values.
pub async fn create_admin(
    db: &DatabaseConnection,
) -> Result<entity::customer_account::Model, DbErr> {
    CustomerAccountFactory::new(db).admin(true).build().await
}
