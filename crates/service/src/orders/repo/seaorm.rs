use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::orders::domain::{NewOrder, Order};
use crate::orders::repository::OrderRepository;
use crate::pagination::Pagination;

/// SeaORM-backed order repository. Each call checks a connection out of the pool.
#[derive(Clone)]
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, ServiceError> {
        let created = models::order::create(&self.db, new).await?;
        Ok(created.into())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Order>, ServiceError> {
        let rows = models::order::list(&self.db, page.skip, page.limit).await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, ServiceError> {
        let found = models::order::find(&self.db, id).await?;
        Ok(found.map(Order::from))
    }
}
