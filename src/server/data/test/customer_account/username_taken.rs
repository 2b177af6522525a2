use super::*;

/// Tests detecting a username held by another account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::customer_account::CustomerAccountFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = CustomerAccountRepository::new(db);

    assert!(repo.username_taken("alice", None).await?);
    assert!(!repo.username_taken("bob", None).await?);

    Ok(())
}

/// Tests that an account keeping its own username is not a conflict.
///
/// Expected: Ok(false) when the only holder is excluded
#[tokio::test]
async fn ignores_excluded_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::customer_account::CustomerAccountFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let taken = CustomerAccountRepository::new(db)
        .username_taken("alice", Some(account.id))
        .await?;

    assert!(!taken);

    Ok(())
}
