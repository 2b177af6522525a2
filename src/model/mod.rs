//! Wire-level DTOs for request and response bodies.

pub mod api;
pub mod customer_account;
pub mod order;
pub mod pagination;
pub mod product;
