use super::*;
use test_utils::factory::order::OrderFactory;

/// Tests replacing the product set of an order.
///
/// Expected: only the new products remain linked
#[tokio::test]
async fn replaces_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;
    let old = factory::create_product(db).await?;
    let new = factory::create_product(db).await?;
    let order = OrderFactory::new(db, account.id)
        .order_date(date(1))
        .products(&[old.id])
        .build()
        .await?;

    let updated = OrderRepository::new(db)
        .update(order.id, None, Some(&[new.id]))
        .await?
        .unwrap();

    assert_eq!(updated.order_date, date(1));
    assert_eq!(updated.products.len(), 1);
    assert_eq!(updated.products[0].id, new.id);
    let rows = entity::prelude::OrderProduct::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests changing only the date keeps the products.
///
/// Expected: new date and unchanged products
#[tokio::test]
async fn updates_date_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let updated = OrderRepository::new(db)
        .update(order.id, Some(date(15)), None)
        .await?
        .unwrap();

    assert_eq!(updated.order_date, date(15));
    assert_eq!(updated.products[0].id, product.id);

    Ok(())
}

/// Tests updating an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db)
        .update(99, Some(date(2)), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
