use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateOrder, Order};
use super::repository::OrderRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service for orders, independent of the web framework.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self { Self { repo } }

    /// Derive the total and persist the order.
    #[instrument(skip(self, input), fields(customer = %input.customer_name, product = %input.product_name))]
    pub async fn create(&self, input: CreateOrder) -> Result<Order, ServiceError> {
        let order = self.repo.create(input.derive()?).await?;
        common::metrics::record_created("order");
        info!(order_id = order.id, total_amount = order.total_amount, "order_created");
        Ok(order)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Order>, ServiceError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.list(page).await
    }

    /// Any id outside the 32-bit serial range cannot exist and is reported as not found.
    pub async fn get(&self, id: i64) -> Result<Order, ServiceError> {
        let Ok(id) = i32::try_from(id) else {
            return Err(ServiceError::not_found("Order"));
        };
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order"))
    }
}
