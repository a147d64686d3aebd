

use migration::{MigratorTrait, OrdersMigrator, SalesMigrator};
use sea_orm::DatabaseConnection;

/// Connect to `DATABASE_URL` and create both tables, or return `None` so the caller can skip.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("skip: DATABASE_URL not set");
        return None;
    };
    let db = match crate::db::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = OrdersMigrator::up(&db, None).await {
        eprintln!("skip: orders migrate up failed: {}", e);
        return None;
    }
    if let Err(e) = SalesMigrator::up(&db, None).await {
        eprintln!("skip: sales migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
