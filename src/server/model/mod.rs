//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! store records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through fallible `try_from_dto`
//! conversions that collect every field error before failing.

pub mod customer_account;
pub mod order;
pub mod page;
pub mod product;
