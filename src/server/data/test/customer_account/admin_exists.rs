use super::*;

/// Tests detecting when no admin accounts exist.
///
/// Expected: Ok(false) with only regular accounts
#[tokio::test]
async fn returns_false_with_only_regular_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_customer_account(db).await?;

    let result = CustomerAccountRepository::new(db).admin_exists().await?;

    assert!(!result);

    Ok(())
}

/// Tests promoting an account to admin.
///
/// Expected: admin_exists flips to true and the account reads back as admin
#[tokio::test]
async fn set_role_promotes_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;
    let repo = CustomerAccountRepository::new(db);

    repo.set_role(account.id, Role::Admin).await?;

    assert!(repo.admin_exists().await?);
    let promoted = repo.find_by_id(account.id).await?.unwrap();
    assert!(promoted.is_admin());

    Ok(())
}
