use async_trait::async_trait;

use super::domain::{NewSale, Sale, SaleField};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence gateway for sales.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn create(&self, new: NewSale) -> Result<Sale, ServiceError>;
    async fn list(&self, page: Pagination) -> Result<Vec<Sale>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Sale>, ServiceError>;
    /// Exact match on one indexed column; no match is an empty vec.
    async fn get_by_field(&self, field: SaleField, value: &str) -> Result<Vec<Sale>, ServiceError>;
}

/// In-memory repository used by tests
pub mod memory {
    use super::*;
    use chrono::Utc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemorySaleRepository {
        rows: Mutex<Vec<Sale>>,
        unavailable: bool,
    }

    impl InMemorySaleRepository {
        /// Repository whose every call fails like an unreachable database.
        pub fn unavailable() -> Self {
            Self { rows: Mutex::default(), unavailable: true }
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SaleRepository for InMemorySaleRepository {
        async fn create(&self, new: NewSale) -> Result<Sale, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().await;
            let id = rows.last().map_or(1, |s| s.id + 1);
            let sale = Sale {
                id,
                salesperson_name: new.salesperson_name,
                customer_name: new.customer_name,
                product_name: new.product_name,
                quantity: new.quantity,
                unit_price: new.unit_price,
                total_amount: new.total_amount,
                commission: new.commission,
                sale_date: Utc::now().into(),
            };
            rows.push(sale.clone());
            Ok(sale)
        }

        async fn list(&self, page: Pagination) -> Result<Vec<Sale>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().await;
            Ok(page.apply(&rows))
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Sale>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|s| s.id == id).cloned())
        }

        async fn get_by_field(&self, field: SaleField, value: &str) -> Result<Vec<Sale>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().await;
            Ok(rows.iter().filter(|s| field.matches(s, value)).cloned().collect())
        }
    }
}
