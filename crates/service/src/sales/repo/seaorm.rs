use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::sales::domain::{NewSale, Sale, SaleField};
use crate::sales::repository::SaleRepository;

#[derive(Clone)]
pub struct SeaOrmSaleRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn create(&self, new: NewSale) -> Result<Sale, ServiceError> {
        let created = models::sale::create(&self.db, new).await?;
        Ok(created.into())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Sale>, ServiceError> {
        let rows = models::sale::list(&self.db, page.skip, page.limit).await?;
        Ok(rows.into_iter().map(Sale::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Sale>, ServiceError> {
        let found = models::sale::find(&self.db, id).await?;
        Ok(found.map(Sale::from))
    }

    async fn get_by_field(&self, field: SaleField, value: &str) -> Result<Vec<Sale>, ServiceError> {
        let rows = models::sale::find_by_column(&self.db, field.column(), value).await?;
        Ok(rows.into_iter().map(Sale::from).collect())
    }
}
