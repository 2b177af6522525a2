use super::*;

/// Tests that only existing products are returned, ordered by ID.
///
/// Expected: Ok(Vec) containing the two existing products
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_product(db).await?;
    let second = factory::create_product(db).await?;

    let products = ProductRepository::new(db)
        .find_by_ids(&[second.id, 999, first.id])
        .await?;

    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty ID list short-circuits.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_ids_return_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;

    let products = ProductRepository::new(db).find_by_ids(&[]).await?;

    assert!(products.is_empty());

    Ok(())
}
