use super::*;

/// Tests admin account passes the admin permission check.
///
/// Expected: Ok(CustomerAccount) with the admin role
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let admin = factory::create_admin(db).await?;
    let headers = authorized(&tokens, admin);

    let returned = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(returned.is_admin());

    Ok(())
}

/// Tests non-admin account is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_regular_account() -> Result<(), AppError> {
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

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, account_id),
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests a demoted admin loses access even with a token issued while admin.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn role_is_read_from_database() -> Result<(), AppError> {
    use crate::server::{data::customer_account::CustomerAccountRepository, model::customer_account::Role};

    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let admin = factory::create_admin(db).await?;
    let admin_id = admin.id;
    let headers = authorized(&tokens, admin);

    CustomerAccountRepository::new(db)
        .set_role(admin_id, Role::User)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
