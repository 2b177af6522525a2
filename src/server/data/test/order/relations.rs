use super::*;
use sea_orm::ModelTrait;

/// Tests walking from association rows to both linked entities.
///
/// Expected: each association row resolves to its order and its product
#[tokio::test]
async fn association_rows_resolve_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let links = order
        .find_related(entity::prelude::OrderProduct)
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);

    let linked_product = links[0]
        .find_related(entity::prelude::Product)
        .one(db)
        .await?;
    let linked_order = links[0]
        .find_related(entity::prelude::Order)
        .one(db)
        .await?;

    assert_eq!(linked_product.map(|p| p.id), Some(product.id));
    assert_eq!(linked_order.map(|o| o.id), Some(order.id));

    Ok(())
}

/// Tests the many-to-many path from a product to the orders containing it.
///
/// Expected: the product's orders are exactly the orders linking it
#[tokio::test]
async fn product_reaches_orders_through_association() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (account, product, order) = factory::helpers::create_order_with_dependencies(db).await?;
    factory::create_order(db, account.id).await?;

    let orders = product.find_related(entity::prelude::Order).all(db).await?;

    assert_eq!(orders.iter().map(|o| o.id).collect::<Vec<_>>(), vec![order.id]);

    Ok(())
}
