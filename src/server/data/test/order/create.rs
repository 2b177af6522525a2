use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests creating an order with two products.
///
/// Expected: Ok(Order) with both products in ID order and the association rows stored
#[tokio::test]
async fn creates_order_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;
    let mug = ProductFactory::new(db).name("Mug").price(8.0).build().await?;
    let beans = ProductFactory::new(db).name("Beans").price(12.5).build().await?;

    let order = OrderRepository::new(db)
        .create(date(1), account.id, &[mug.id, beans.id])
        .await?;

    assert_eq!(order.customer_account_id, account.id);
    assert_eq!(order.order_date, date(1));
    let names: Vec<&str> = order.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Mug", "Beans"]);
    assert_eq!(order.total_price(), 20.5);

    let rows = entity::prelude::OrderProduct::find().all(db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests that a failed association insert rolls the order back.
///
/// Expected: Err(DbErr) and no order row left behind
#[tokio::test]
async fn rolls_back_on_unknown_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;

    let result = OrderRepository::new(db)
        .create(date(1), account.id, &[12345])
        .await;

    assert!(result.is_err());
    let orders = entity::prelude::Order::find().all(db).await?;
    assert!(orders.is_empty());

    Ok(())
}
