use super::*;

/// Tests loading an order with its products.
///
/// Expected: Ok(Some(Order)) containing the linked product
#[tokio::test]
async fn loads_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let found = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert_eq!(found.customer_account_id, account.id);
    assert_eq!(found.products.len(), 1);
    assert_eq!(found.products[0].id, product.id);

    Ok(())
}

/// Tests an order without products.
///
/// Expected: Ok(Some(Order)) with an empty product list and zero total
#[tokio::test]
async fn loads_order_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;
    let order = factory::create_order(db, account.id).await?;

    let found = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert!(found.products.is_empty());
    assert_eq!(found.total_price(), 0.0);

    Ok(())
}

/// Tests looking up an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = OrderRepository::new(db).find_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
