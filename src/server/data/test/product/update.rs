use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests updating only the price leaves other fields untouched.
///
/// Expected: Ok(Some(Product)) with the new price
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = ProductFactory::new(db)
        .name("Grinder")
        .details("Burr grinder")
        .build()
        .await?;

    let updated = ProductRepository::new(db)
        .update(
            existing.id,
            UpdateProductParam {
                name: None,
                price: Some(89.0),
                details: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Grinder");
    assert_eq!(updated.price, 89.0);
    assert_eq!(updated.details.as_deref(), Some("Burr grinder"));

    Ok(())
}

/// Tests clearing the details column.
///
/// Expected: Ok(Some(Product)) with details None
#[tokio::test]
async fn clears_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = ProductFactory::new(db)
        .details("Temporary")
        .build()
        .await?;

    let updated = ProductRepository::new(db)
        .update(
            existing.id,
            UpdateProductParam {
                name: None,
                price: None,
                details: Some(None),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.details, None);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(
            42,
            UpdateProductParam {
                name: Some("Ghost".to_string()),
                price: None,
                details: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
