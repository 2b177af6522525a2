//! SeaORM entities for the storefront database.

pub mod prelude;

pub mod customer_account;
pub mod order;
pub mod order_product;
pub mod product;
