use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub use models::order::NewOrder;

use crate::errors::{ensure_finite, ServiceError};

/// Client-submitted order. Derived fields are not part of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Stored order as seen by callers of the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub total_amount: f64,
    pub created_at: DateTime<FixedOffset>,
}

pub fn total_amount(quantity: i32, price: f64) -> f64 {
    f64::from(quantity) * price
}

impl CreateOrder {
    /// Compute derived columns; whatever the client thinks the total is never gets here.
    pub fn derive(self) -> Result<NewOrder, ServiceError> {
        let total_amount = ensure_finite("total_amount", total_amount(self.quantity, self.price))?;
        Ok(NewOrder {
            customer_name: self.customer_name,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            total_amount,
        })
    }
}

impl From<models::order::Model> for Order {
    fn from(m: models::order::Model) -> Self {
        Self {
            id: m.id,
            customer_name: m.customer_name,
            product_name: m.product_name,
            quantity: m.quantity,
            price: m.price,
            total_amount: m.total_amount,
            created_at: m.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_quantity_times_price() {
        let new = CreateOrder {
            customer_name: "Alice".into(),
            product_name: "Widget".into(),
            quantity: 3,
            price: 9.99,
        }
        .derive()
        .unwrap();
        assert_eq!(new.total_amount, 3.0 * 9.99);
        assert_eq!(serde_json::to_string(&new.total_amount).unwrap(), "29.97");
    }

    #[test]
    fn negative_values_are_not_rejected() {
        let new = CreateOrder {
            customer_name: "A".into(),
            product_name: "B".into(),
            quantity: -2,
            price: 4.5,
        }
        .derive()
        .unwrap();
        assert_eq!(new.total_amount, -9.0);
    }

    #[test]
    fn client_supplied_total_is_ignored() {
        let input: CreateOrder = serde_json::from_value(serde_json::json!({
            "customer_name": "Alice",
            "product_name": "Widget",
            "quantity": 2,
            "price": 1.5,
            "total_amount": 1000.0
        }))
        .unwrap();
        assert_eq!(input.derive().unwrap().total_amount, 3.0);
    }

    #[test]
    fn missing_or_mistyped_fields_fail_to_parse() {
        let missing = serde_json::from_value::<CreateOrder>(serde_json::json!({
            "customer_name": "Alice",
            "product_name": "Widget",
            "quantity": 2
        }));
        assert!(missing.is_err());

        let mistyped = serde_json::from_value::<CreateOrder>(serde_json::json!({
            "customer_name": "Alice",
            "product_name": "Widget",
            "quantity": "two",
            "price": 1.0
        }));
        assert!(mistyped.is_err());
    }

    #[test]
    fn integer_price_is_accepted() {
        let input: CreateOrder = serde_json::from_value(serde_json::json!({
            "customer_name": "Alice",
            "product_name": "Widget",
            "quantity": 4,
            "price": 5
        }))
        .unwrap();
        assert_eq!(input.price, 5.0);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let res = CreateOrder {
            customer_name: "A".into(),
            product_name: "B".into(),
            quantity: 10,
            price: 1e308,
        }
        .derive();
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
