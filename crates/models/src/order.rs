use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_type = "Double")]
    pub total_amount: f64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new row; `total_amount` must already be derived.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub total_amount: f64,
}

/// Insert one order; `id` comes from the sequence and `created_at` is stamped here.
pub async fn create(db: &DatabaseConnection, new: NewOrder) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        customer_name: Set(new.customer_name),
        product_name: Set(new.product_name),
        quantity: Set(new.quantity),
        price: Set(new.price),
        total_amount: Set(new.total_amount),
        created_at: Set(Utc::now().into()),
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
