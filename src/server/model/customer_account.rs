//! Customer account domain models and parameters.
//!
//! Provides the account model used by authentication and ownership checks, the
//! account role, and the validated parameters for registration, credential updates
//! and login.

use crate::{
    model::customer_account::{
        CreateCustomerAccountDto, CustomerAccountDto, LoginDto, UpdateCredentialsDto,
    },
    server::{
        error::validation::ValidationErrors,
        util::validate::{check_email, check_min_length, check_text, required},
    },
};

pub const NAME_MAX: usize = 255;
pub const USERNAME_MAX: usize = 255;
pub const PASSWORD_MIN: usize = 8;

/// Role granted to a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role, treating anything other than `admin` as `user`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// A customer account including its stored password hash.
///
/// The hash never leaves the server: `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAccount {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl CustomerAccount {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the account to a DTO for API responses, omitting the password hash.
    pub fn into_dto(self) -> CustomerAccountDto {
        CustomerAccountDto {
            id: self.id,
            name: self.name,
            email: self.email,
            username: self.username,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer_account::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            username: entity.username,
            password_hash: entity.password_hash,
            role: Role::from_stored(&entity.role),
        }
    }
}

/// Validated registration parameters. The password is still plaintext here.
#[derive(Debug, Clone)]
pub struct CreateCustomerAccountParam {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl CreateCustomerAccountParam {
    pub fn try_from_dto(dto: CreateCustomerAccountDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", dto.name);
        if let Some(name) = &name {
            check_text(&mut errors, "name", name, NAME_MAX);
        }

        let email = required(&mut errors, "email", dto.email);
        if let Some(email) = &email {
            check_email(&mut errors, "email", email);
        }

        let username = required(&mut errors, "username", dto.username);
        if let Some(username) = &username {
            check_text(&mut errors, "username", username, USERNAME_MAX);
        }

        let password = required(&mut errors, "password", dto.password);
        if let Some(password) = &password {
            check_min_length(&mut errors, "password", password, PASSWORD_MIN);
        }

        match (name, email, username, password) {
            (Some(name), Some(email), Some(username), Some(password)) if errors.is_empty() => {
                Ok(Self {
                    name,
                    email,
                    username,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validated credential update. At least one field is set.
#[derive(Debug, Clone)]
pub struct UpdateCredentialsParam {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UpdateCredentialsParam {
    pub fn try_from_dto(dto: UpdateCredentialsDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if dto.username.is_none() && dto.password.is_none() {
            errors.add("_schema", "No fields to update.");
        }
        if let Some(username) = &dto.username {
            check_text(&mut errors, "username", username, USERNAME_MAX);
        }
        if let Some(password) = &dto.password {
            check_min_length(&mut errors, "password", password, PASSWORD_MIN);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            username: dto.username,
            password: dto.password,
        })
    }
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

impl LoginParam {
    pub fn try_from_dto(dto: LoginDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required(&mut errors, "username", dto.username);
        let password = required(&mut errors, "password", dto.password);

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(errors),
        }
    }
}
