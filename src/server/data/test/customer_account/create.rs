use super::*;

/// Tests creating an account and reading it back by ID and username.
///
/// Expected: Ok(CustomerAccount) retrievable through both lookups
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerAccountRepository::new(db);
    let account = repo
        .create(
            "Grace Hopper".to_string(),
            "grace@example.com".to_string(),
            "grace".to_string(),
            "salt$digest".to_string(),
            Role::User,
        )
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.role, Role::User);
    assert_eq!(repo.find_by_id(account.id).await?, Some(account.clone()));
    assert_eq!(repo.find_by_username("grace").await?, Some(account));

    Ok(())
}

/// Tests that a duplicate username violates the unique constraint.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer_account::CustomerAccountFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let result = CustomerAccountRepository::new(db)
        .create(
            "Other".to_string(),
            "other@example.com".to_string(),
            "taken".to_string(),
            "salt$digest".to_string(),
            Role::User,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
