//! Create `orders` table.
//! Stores immutable order records; `total_amount` is derived by the service before insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string(Orders::CustomerName))
                    .col(string(Orders::ProductName))
                    .col(integer(Orders::Quantity))
                    .col(double(Orders::Price))
                    .col(double(Orders::TotalAmount))
                    .col(timestamp_with_time_zone(Orders::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_customer_name")
                    .table(Orders::Table)
                    .col(Orders::CustomerName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_product_name")
                    .table(Orders::Table)
                    .col(Orders::ProductName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    CustomerName,
    ProductName,
    Quantity,
    Price,
    TotalAmount,
    CreatedAt,
}
