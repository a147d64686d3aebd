//! Migrators creating each service's tables.
//! Every service owns its own database, so each migrator tracks its history in a
//! separate bookkeeping table.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_orders;
mod m20240101_000002_create_sales;

/// Creates the `orders` table and its lookup indexes.
pub struct OrdersMigrator;

#[async_trait::async_trait]
impl MigratorTrait for OrdersMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_orders::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_orders").into_iden()
    }
}

/// Creates the `sales` table and its lookup indexes.
pub struct SalesMigrator;

#[async_trait::async_trait]
impl MigratorTrait for SalesMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_sales::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_sales").into_iden()
    }
}
