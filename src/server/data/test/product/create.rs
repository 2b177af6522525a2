use super::*;

/// Tests creating a product with every field set.
///
/// Expected: Ok(Product) with an assigned ID and the given fields
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParam {
            name: "Espresso Machine".to_string(),
            price: 249.5,
            details: Some("15 bar pump".to_string()),
        })
        .await?;

    assert!(product.id > 0);
    assert_eq!(product.name, "Espresso Machine");
    assert_eq!(product.price, 249.5);
    assert_eq!(product.details.as_deref(), Some("15 bar pump"));

    let stored = repo.find_by_id(product.id).await?;
    assert_eq!(stored, Some(product));

    Ok(())
}

/// Tests creating a product without details.
///
/// Expected: Ok(Product) with details None
#[tokio::test]
async fn creates_product_without_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductRepository::new(db)
        .create(CreateProductParam {
            name: "Filter".to_string(),
            price: 0.0,
            details: None,
        })
        .await?;

    assert_eq!(product.details, None);

    Ok(())
}

/// Tests looking up a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
