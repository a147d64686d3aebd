use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{orders::OrderResponse, sales::SaleResponse};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub service: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub detail: String }

#[derive(ToSchema)]
pub struct CreateOrderDoc {
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct CreateSaleDoc {
    pub salesperson_name: String,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// Fraction of the total paid as commission
    #[schema(default = 0.05)]
    pub commission_rate: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Orders Service", version = "1.0.0"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::orders::create_order,
        crate::routes::orders::list_orders,
        crate::routes::orders::get_order,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            CreateOrderDoc,
            OrderResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "orders")
    )
)]
pub struct OrdersApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "Sales Service", version = "1.0.0"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::sales::create_sale,
        crate::routes::sales::list_sales,
        crate::routes::sales::get_sale,
        crate::routes::sales::sales_by_salesperson,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            ErrorResponse,
            CreateSaleDoc,
            SaleResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "sales")
    )
)]
pub struct SalesApiDoc;
