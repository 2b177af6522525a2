use super::*;

mod require_account;
mod require_admin;

/// Tests that a request without a token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_customer_account(db).await?;
    let foreign = TokenCodec::new("someone-else", Duration::minutes(5));
    let headers = authorized(&foreign, account);

    let tokens = codec();
    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a correctly signed token whose subject is not an account ID is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_non_numeric_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let now = chrono::Utc::now();
    let token = tokens.sign(&Claims {
        sub: "ada".to_string(),
        role: "admin".to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(5)).timestamp(),
    })?;
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a token for an account that no longer exists is rejected.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn rejects_token_for_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = codec();

    let ghost = entity::customer_account::Model {
        id: 4242,
        name: "Ghost".to_string(),
        email: "ghost@example.com".to_string(),
        username: "ghost".to_string(),
        password_hash: String::new(),
        role: "user".to_string(),
    };
    let headers = authorized(&tokens, ghost);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountNotFound(id))) => assert_eq!(id, 4242),
        other => panic!("Expected AccountNotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests empty permission list grants access to any authenticated account.
///
/// Expected: Ok(CustomerAccount)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
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

    let returned = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(returned.id, account_id);
    assert!(!returned.is_admin());

    Ok(())
}
