use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_customer_account_table::CustomerAccount;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(date(Order::OrderDate))
                    .col(integer(Order::CustomerAccountId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer_account_id")
                            .from(Order::Table, Order::CustomerAccountId)
                            .to(CustomerAccount::Table, CustomerAccount::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_customer_account_id")
                    .table(Order::Table)
                    .col(Order::CustomerAccountId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    OrderDate,
    CustomerAccountId,
}
