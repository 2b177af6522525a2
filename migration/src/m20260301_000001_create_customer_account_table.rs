use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerAccount::Id))
                    .col(string_len(CustomerAccount::Name, 255))
                    .col(string_len(CustomerAccount::Email, 320))
                    .col(string_len_uniq(CustomerAccount::Username, 255))
                    .col(string(CustomerAccount::PasswordHash))
                    .col(string_len(CustomerAccount::Role, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerAccount {
    #[sea_orm(iden = "customer_accounts")]
    Table,
    Id,
    Name,
    Email,
    Username,
    PasswordHash,
    Role,
}
