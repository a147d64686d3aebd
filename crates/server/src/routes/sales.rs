use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use service::errors::ServiceError;
use service::pagination::Pagination;
use service::sales::{domain::{CreateSale, Sale}, SaleService};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::errors::JsonApiError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl TryFrom<ListQuery> for Pagination {
    type Error = ServiceError;

    fn try_from(q: ListQuery) -> Result<Self, Self::Error> { Pagination::checked(q.skip, q.limit) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SaleResponse {
    pub id: i32,
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_amount: f64,
    pub commission: f64,
    #[schema(value_type = String, format = DateTime)]
    pub sale_date: DateTime<FixedOffset>,
}

impl From<Sale> for SaleResponse {
    fn from(s: Sale) -> Self {
        Self {
            id: s.id,
            salesperson_name: s.salesperson_name,
            customer_name: s.customer_name,
            product_name: s.product_name,
            quantity: s.quantity,
            unit_price: s.unit_price,
            total_amount: s.total_amount,
            commission: s.commission,
            sale_date: s.sale_date,
        }
    }
}

fn to_responses(sales: Vec<Sale>) -> Vec<SaleResponse> {
    sales.into_iter().map(SaleResponse::from).collect()
}

pub fn router(sales: SaleService) -> Router {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/:sale_id", get(get_sale))
        .route("/sales/salesperson/:salesperson_name", get(sales_by_salesperson))
        .with_state(sales)
}

#[utoipa::path(
    post, path = "/sales", tag = "sales",
    request_body = crate::openapi::CreateSaleDoc,
    responses(
        (status = 200, description = "Created", body = SaleResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create_sale(
    State(sales): State<SaleService>,
    WithRejection(Json(input), _): WithRejection<Json<CreateSale>, JsonApiError>,
) -> Result<Json<SaleResponse>, JsonApiError> {
    let sale = sales.create(input).await?;
    info!(id = sale.id, salesperson = %sale.salesperson_name, "created sale");
    Ok(Json(sale.into()))
}

#[utoipa::path(
    get, path = "/sales", tag = "sales",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [SaleResponse]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list_sales(
    State(sales): State<SaleService>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<Json<Vec<SaleResponse>>, JsonApiError> {
    Ok(Json(to_responses(sales.list(Pagination::try_from(q)?).await?)))
}

#[utoipa::path(
    get, path = "/sales/{sale_id}", tag = "sales",
    params(("sale_id" = i64, Path, description = "Sale id")),
    responses(
        (status = 200, description = "OK", body = SaleResponse),
        (status = 404, description = "Sale not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_sale(
    State(sales): State<SaleService>,
    WithRejection(Path(sale_id), _): WithRejection<Path<i64>, JsonApiError>,
) -> Result<Json<SaleResponse>, JsonApiError> {
    Ok(Json(sales.get(sale_id).await?.into()))
}

#[utoipa::path(
    get, path = "/sales/salesperson/{salesperson_name}", tag = "sales",
    params(("salesperson_name" = String, Path, description = "Exact salesperson name")),
    responses((status = 200, description = "Matching sales, possibly empty", body = [SaleResponse]))
)]
pub async fn sales_by_salesperson(
    State(sales): State<SaleService>,
    WithRejection(Path(salesperson_name), _): WithRejection<Path<String>, JsonApiError>,
) -> Result<Json<Vec<SaleResponse>>, JsonApiError> {
    Ok(Json(to_responses(sales.by_salesperson(&salesperson_name).await?)))
}
