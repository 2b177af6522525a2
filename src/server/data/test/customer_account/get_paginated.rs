use super::*;

/// Tests paginating accounts in ID order.
///
/// Expected: requested page size and the full total
#[tokio::test]
async fn pages_accounts_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomerAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_customer_account(db).await?;
    factory::create_admin(db).await?;
    factory::create_customer_account(db).await?;

    let (accounts, total) = CustomerAccountRepository::new(db)
        .get_paginated(0, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, first.id);
    assert!(accounts[1].is_admin());

    Ok(())
}
