use async_trait::async_trait;

use super::domain::{NewOrder, Order};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Persistence gateway for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a derived order; the store assigns `id` and `created_at`.
    async fn create(&self, new: NewOrder) -> Result<Order, ServiceError>;
    /// Orders in insertion order, bounded by `page`.
    async fn list(&self, page: Pagination) -> Result<Vec<Order>, ServiceError>;
    /// `Ok(None)` when no order has this id.
    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, ServiceError>;
}

/// In-memory repository used by tests
pub mod memory {
    use super::*;
    use chrono::Utc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryOrderRepository {
        rows: Mutex<Vec<Order>>,
        unavailable: bool,
    }

    impl InMemoryOrderRepository {
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
    impl OrderRepository for InMemoryOrderRepository {
        async fn create(&self, new: NewOrder) -> Result<Order, ServiceError> {
            self.check()?;
            let mut rows = self.rows.lock().await;
            let id = rows.last().map_or(1, |o| o.id + 1);
            let order = Order {
                id,
                customer_name: new.customer_name,
                product_name: new.product_name,
                quantity: new.quantity,
                price: new.price,
                total_amount: new.total_amount,
                created_at: Utc::now().into(),
            };
            rows.push(order.clone());
            Ok(order)
        }

        async fn list(&self, page: Pagination) -> Result<Vec<Order>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().await;
            Ok(page.apply(&rows))
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Order>, ServiceError> {
            self.check()?;
            let rows = self.rows.lock().await;
            Ok(rows.iter().find(|o| o.id == id).cloned())
        }
    }
}
