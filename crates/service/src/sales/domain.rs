use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub use models::sale::NewSale;

use crate::errors::{ensure_finite, ServiceError};

pub const DEFAULT_COMMISSION_RATE: f64 = 0.05;

fn default_commission_rate() -> f64 { DEFAULT_COMMISSION_RATE }

/// Client-submitted sale. The commission rate is trusted; amounts are not accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSale {
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i32,
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub commission: f64,
    pub sale_date: DateTime<FixedOffset>,
}

/// Indexed string columns a sale can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleField {
    SalespersonName,
    CustomerName,
    ProductName,
}

impl SaleField {
    pub fn matches(self, sale: &Sale, value: &str) -> bool {
        match self {
            SaleField::SalespersonName => sale.salesperson_name == value,
            SaleField::CustomerName => sale.customer_name == value,
            SaleField::ProductName => sale.product_name == value,
        }
    }

    pub fn column(self) -> models::sale::Column {
        match self {
            SaleField::SalespersonName => models::sale::Column::SalespersonName,
            SaleField::CustomerName => models::sale::Column::CustomerName,
            SaleField::ProductName => models::sale::Column::ProductName,
        }
    }
}

pub fn total_amount(quantity: i32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

pub fn commission(total_amount: f64, commission_rate: f64) -> f64 {
    total_amount * commission_rate
}

impl CreateSale {
    pub fn derive(self) -> Result<NewSale, ServiceError> {
        let total_amount = ensure_finite("total_amount", total_amount(self.quantity, self.unit_price))?;
        let commission = ensure_finite("commission", commission(total_amount, self.commission_rate))?;
        Ok(NewSale {
            salesperson_name: self.salesperson_name,
            customer_name: self.customer_name,
            product_name: self.product_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_amount,
            commission,
        })
    }
}

impl From<models::sale::Model> for Sale {
    fn from(m: models::sale::Model) -> Self {
        Self {
            id: m.id,
            salesperson_name: m.salesperson_name,
            customer_name: m.customer_name,
            product_name: m.product_name,
            quantity: m.quantity,
            unit_price: m.unit_price,
            total_amount: m.total_amount,
            commission: m.commission,
            sale_date: m.sale_date,
        }
    }
}
