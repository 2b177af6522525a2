use super::*;

/// Tests replacing username and password hash.
///
/// Expected: Ok(Some(CustomerAccount)) with both fields replaced
#[tokio::test]
async fn replaces_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;

    let updated = CustomerAccountRepository::new(db)
        .update_credentials(
            account.id,
            Some("renamed".to_string()),
            Some("newsalt$newdigest".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.password_hash, "newsalt$newdigest");
    assert_eq!(updated.email, account.email);

    Ok(())
}

/// Tests that omitted fields keep their stored values.
///
/// Expected: username unchanged when only the hash is replaced
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;

    let updated = CustomerAccountRepository::new(db)
        .update_credentials(account.id, None, Some("s$d".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.username, account.username);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerAccountRepository::new(db)
        .update_credentials(77, Some("nobody".to_string()), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
