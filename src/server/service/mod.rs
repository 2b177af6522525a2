//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks, username uniqueness and password hashing
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Access control stays in the controllers, which run the auth guard before calling in.

pub mod auth;
pub mod customer_account;
pub mod order;
pub mod product;
