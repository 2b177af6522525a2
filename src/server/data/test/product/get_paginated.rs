use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests paging through products.
///
/// Expected: second page holds the remaining product and total counts all products
#[tokio::test]
async fn pages_through_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_product(db).await?;
    }

    let repo = ProductRepository::new(db);
    let (first_page, total) = repo.get_paginated(0, 2, None).await?;
    let (second_page, _) = repo.get_paginated(1, 2, None).await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page[1].id < second_page[0].id);

    Ok(())
}

/// Tests filtering products by a name substring.
///
/// Expected: only products whose name contains the search term
#[tokio::test]
async fn filters_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ProductFactory::new(db).name("Green Tea").build().await?;
    ProductFactory::new(db).name("Black Tea").build().await?;
    ProductFactory::new(db).name("Coffee").build().await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(0, 10, Some("Tea"))
        .await?;

    assert_eq!(total, 2);
    assert!(products.iter().all(|p| p.name.contains("Tea")));

    Ok(())
}

/// Tests a page past the end.
///
/// Expected: empty items with the full total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_product(db).await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(5, 10, None)
        .await?;

    assert!(products.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
