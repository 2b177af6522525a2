//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order together with the account and product it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, product, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer_account::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let account = crate::factory::customer_account::create_customer_account(db).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::OrderFactory::new(db, account.id)
        .products(&[product.id])
        .build()
        .await?;

    Ok((account, product, order))
}
