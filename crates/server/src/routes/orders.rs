use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use service::orders::{domain::{CreateOrder, Order}, OrderService};
use service::errors::ServiceError;
use service::pagination::Pagination;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::errors::JsonApiError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// rows to skip, default 0
    pub skip: Option<u64>,
    /// maximum rows, default 100
    pub limit: Option<u64>,
}

impl TryFrom<ListQuery> for Pagination {
    type Error = ServiceError;

    fn try_from(q: ListQuery) -> Result<Self, Self::Error> { Pagination::checked(q.skip, q.limit) }
}

/// Wire shape of a stored order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub total_amount: f64,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<FixedOffset>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_name: o.customer_name,
            product_name: o.product_name,
            quantity: o.quantity,
            price: o.price,
            total_amount: o.total_amount,
            created_at: o.created_at,
        }
    }
}

pub fn router(orders: OrderService) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:order_id", get(get_order))
        .with_state(orders)
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses(
        (status = 200, description = "Created", body = OrderResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create_order(
    State(orders): State<OrderService>,
    WithRejection(Json(input), _): WithRejection<Json<CreateOrder>, JsonApiError>,
) -> Result<Json<OrderResponse>, JsonApiError> {
    let order = orders.create(input).await?;
    info!(id = order.id, customer = %order.customer_name, "created order");
    Ok(Json(order.into()))
}

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [OrderResponse]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list_orders(
    State(orders): State<OrderService>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<Json<Vec<OrderResponse>>, JsonApiError> {
    let list = orders.list(Pagination::try_from(q)?).await?;
    Ok(Json(list.into_iter().map(OrderResponse::from).collect()))
}

#[utoipa::path(
    get, path = "/orders/{order_id}", tag = "orders",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "OK", body = OrderResponse),
        (status = 404, description = "Order not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_order(
    State(orders): State<OrderService>,
    WithRejection(Path(order_id), _): WithRejection<Path<i64>, JsonApiError>,
) -> Result<Json<OrderResponse>, JsonApiError> {
    let order = orders.get(order_id).await?;
    Ok(Json(order.into()))
}
