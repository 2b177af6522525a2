use super::*;
use test_utils::factory::order::OrderFactory;

/// Tests listing every order with products attached.
///
/// Expected: all orders with their own products
#[tokio::test]
async fn lists_all_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_customer_account(db).await?;
    let bob = factory::create_customer_account(db).await?;
    let kettle = factory::create_product(db).await?;
    let teapot = factory::create_product(db).await?;

    OrderFactory::new(db, alice.id)
        .products(&[kettle.id])
        .build()
        .await?;
    OrderFactory::new(db, bob.id)
        .products(&[kettle.id, teapot.id])
        .build()
        .await?;

    let (orders, total) = OrderRepository::new(db).get_paginated(0, 10, None).await?;

    assert_eq!(total, 2);
    assert_eq!(orders[0].products.len(), 1);
    assert_eq!(orders[1].products.len(), 2);

    Ok(())
}

/// Tests restricting the listing to one account.
///
/// Expected: only the account's own orders
#[tokio::test]
async fn filters_by_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_customer_account(db).await?;
    let bob = factory::create_customer_account(db).await?;

    factory::create_order(db, alice.id).await?;
    factory::create_order(db, bob.id).await?;
    factory::create_order(db, bob.id).await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(0, 10, Some(bob.id))
        .await?;

    assert_eq!(total, 2);
    assert!(orders.iter().all(|o| o.customer_account_id == bob.id));

    Ok(())
}
