//! Database repository layer for the store's entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Every query,
//! insert and update is performed through these repositories.

pub mod customer_account;
pub mod order;
pub mod product;

#[cfg(test)]
mod test;
