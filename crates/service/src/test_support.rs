#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::{MigratorTrait, OrdersMigrator, SalesMigrator};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection to `DATABASE_URL` with both tables created, or `None` to skip.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;

    let migrated = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = models::db::connect(&url).await else { return false; };
            OrdersMigrator::up(&db, None).await.is_ok() && SalesMigrator::up(&db, None).await.is_ok()
        })
        .await;
    if !migrated {
        eprintln!("skip: database unavailable or migrations failed");
        return None;
    }

    // Return a fresh connection for the current test's runtime
    models::db::connect(&url).await.ok()
}
