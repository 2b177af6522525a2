//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::customer_account::CustomerAccountFactory::new(&db)
//!     .username("alice")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let product = factory::create_product(&db).await?;
//! let order = factory::order::OrderFactory::new(&db, account.id)
//!     .products(&[product.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer_account` - Create customer account entities
//! - `product` - Create product entities
//! - `order` - Create orders together with their product associations
//! - `helpers` - ID generation and multi-entity convenience methods

pub mod customer_account;
pub mod helpers;
pub mod order;
pub mod product;

pub use customer_account::{create_admin, create_customer_account};
pub use order::create_order;
pub use product::create_product;
