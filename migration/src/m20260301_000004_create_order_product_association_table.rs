use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_product_table::Product;
use super::m20260301_000003_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderProductAssociation::Table)
                    .if_not_exists()
                    .col(integer(OrderProductAssociation::OrderId))
                    .col(integer(OrderProductAssociation::ProductId))
                    .primary_key(
                        Index::create()
                            .col(OrderProductAssociation::OrderId)
                            .col(OrderProductAssociation::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_order_id")
                            .from(
                                OrderProductAssociation::Table,
                                OrderProductAssociation::OrderId,
                            )
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_product_id")
                            .from(
                                OrderProductAssociation::Table,
                                OrderProductAssociation::ProductId,
                            )
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(OrderProductAssociation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderProductAssociation {
    #[sea_orm(iden = "order_product_association")]
    Table,
    OrderId,
    ProductId,
}
