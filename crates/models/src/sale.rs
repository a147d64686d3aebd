use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub unit_price: f64,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
    #[sea_orm(column_type = "Double")]
    pub commission: f64,
    pub sale_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new row; `total_amount` and `commission` must already be derived.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSale {
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub commission: f64,
}

pub async fn create(db: &DatabaseConnection, new: NewSale) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        salesperson_name: Set(new.salesperson_name),
        customer_name: Set(new.customer_name),
        product_name: Set(new.product_name),
        quantity: Set(new.quantity),
        unit_price: Set(new.unit_price),
        total_amount: Set(new.total_amount),
        commission: Set(new.commission),
        sale_date: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection, offset: u64, limit: u64) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Exact-match scan on one string column, in insertion order.
pub async fn find_by_column(db: &DatabaseConnection, column: Column, value: &str) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(column.eq(value))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
