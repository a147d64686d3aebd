//! Create `sales` table.
//! `total_amount` and `commission` are derived by the service; the commission rate itself
//! is not stored.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(pk_auto(Sales::Id))
                    .col(string(Sales::SalespersonName))
                    .col(string(Sales::CustomerName))
                    .col(string(Sales::ProductName))
                    .col(integer(Sales::Quantity))
                    .col(double(Sales::UnitPrice))
                    .col(double(Sales::TotalAmount))
                    .col(double(Sales::Commission))
                    .col(timestamp_with_time_zone(Sales::SaleDate))
                    .to_owned(),
            )
            .await?;

        // Lookup columns, salesperson first since it backs the filter endpoint
        for (name, column) in [
            ("idx_sales_salesperson_name", Sales::SalespersonName),
            ("idx_sales_customer_name", Sales::CustomerName),
            ("idx_sales_product_name", Sales::ProductName),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Sales::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sales::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sales {
    Table,
    Id,
    SalespersonName,
    CustomerName,
    ProductName,
    Quantity,
    UnitPrice,
    TotalAmount,
    Commission,
    SaleDate,
}
