use super::*;

/// Tests an account may access its own resources.
///
/// Expected: Ok(CustomerAccount)
#[tokio::test]
async fn allows_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let account = factory::create_customer_account(db).await?;
    let account_id = account.id;
    let headers = authorized(&tokens, account);

    let returned = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Account(account_id)])
        .await?;

    assert_eq!(returned.id, account_id);

    Ok(())
}

/// Tests an account is denied another account's resources.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_other_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let account = factory::create_customer_account(db).await?;
    let other = factory::create_customer_account(db).await?;
    let headers = authorized(&tokens, account);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Account(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests admins bypass ownership checks.
///
/// Expected: Ok(()) from ensure_permissions for a foreign account ID
#[tokio::test]
async fn admin_bypasses_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = CustomerAccount::from_entity(factory::create_admin(db).await?);
    let other = factory::create_customer_account(db).await?;

    ensure_permissions(&admin, &[Permission::Account(other.id), Permission::Admin])?;

    Ok(())
}
