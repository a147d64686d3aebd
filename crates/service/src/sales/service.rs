use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateSale, Sale, SaleField};
use super::repository::SaleRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service for sales.
#[derive(Clone)]
pub struct SaleService {
    repo: Arc<dyn SaleRepository>,
}

impl SaleService {
    pub fn new(repo: Arc<dyn SaleRepository>) -> Self { Self { repo } }

    /// Derive total and commission, then persist the sale.
    #[instrument(skip(self, input), fields(salesperson = %input.salesperson_name, rate = input.commission_rate))]
    pub async fn create(&self, input: CreateSale) -> Result<Sale, ServiceError> {
        let sale = self.repo.create(input.derive()?).await?;
        common::metrics::record_created("sale");
        info!(sale_id = sale.id, total_amount = sale.total_amount, commission = sale.commission, "sale_created");
        Ok(sale)
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Sale>, ServiceError> {
        if page.is_empty() {
            return Ok(Vec::new());
        }
        self.repo.list(page).await
    }

    /// Any id outside the 32-bit serial range cannot exist and is reported as not found.
    pub async fn get(&self, id: i64) -> Result<Sale, ServiceError> {
        let Ok(id) = i32::try_from(id) else {
            return Err(ServiceError::not_found("Sale"));
        };
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sale"))
    }

    pub async fn by_salesperson(&self, name: &str) -> Result<Vec<Sale>, ServiceError> {
        self.repo.get_by_field(SaleField::SalespersonName, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sales::domain::DEFAULT_COMMISSION_RATE;
    use crate::sales::repository::memory::InMemorySaleRepository;

    fn service() -> SaleService {
        SaleService::new(Arc::new(InMemorySaleRepository::default()))
    }

    fn sale_by(salesperson: &str, quantity: i32, unit_price: f64) -> CreateSale {
        CreateSale {
            salesperson_name: salesperson.into(),
            customer_name: "Alice".into(),
            product_name: "Gadget".into(),
            quantity,
            unit_price,
            commission_rate: DEFAULT_COMMISSION_RATE,
        }
    }

    #[tokio::test]
    async fn default_commission_is_five_percent_of_total() {
        let svc = service();
        let sale = svc.create(sale_by("Bob", 7, 12.5)).await.unwrap();
        assert_eq!(sale.total_amount, 7.0 * 12.5);
        assert_eq!(sale.commission, 7.0 * 12.5 * 0.05);
        assert_eq!(svc.get(sale.id.into()).await.unwrap(), sale);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let err = service().get(7).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Sale not found"));
        assert!(matches!(service().get(3_000_000_000).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn salesperson_filter_returns_only_matches_in_order() {
        let svc = service();
        let a = svc.create(sale_by("Bob", 1, 1.0)).await.unwrap();
        svc.create(sale_by("Carol", 1, 1.0)).await.unwrap();
        let b = svc.create(sale_by("Bob", 2, 1.0)).await.unwrap();

        let bobs = svc.by_salesperson("Bob").await.unwrap();
        assert_eq!(bobs, vec![a, b]);
        assert!(svc.by_salesperson("Dave").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_limit_and_empty_table_list_nothing() {
        let svc = service();
        assert!(svc.list(Pagination::default()).await.unwrap().is_empty());
        svc.create(sale_by("Bob", 1, 1.0)).await.unwrap();
        assert!(svc.list(Pagination::new(None, Some(0))).await.unwrap().is_empty());
        assert_eq!(svc.list(Pagination::default()).await.unwrap().len(), 1);
    }
}
