use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Message};
use configs::ServiceKind;
use service::{orders::OrderService, sales::SaleService};

use crate::openapi::{OrdersApiDoc, SalesApiDoc};

pub mod accounts;
pub mod blog;
pub mod orders;
pub mod sales;

pub fn service_title(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Accounts => "Accounts Service",
        ServiceKind::Blog => "Blog Service",
        ServiceKind::Orders => "Orders Service",
        ServiceKind::Sales => "Sales Service",
    }
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is running", body = crate::openapi::MessageResponse)))]
pub async fn root(State(kind): State<ServiceKind>) -> Json<Message> {
    Json(Message::new(format!("{} is running", service_title(kind))))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Healthy", body = crate::openapi::HealthResponse)))]
pub async fn health(State(kind): State<ServiceKind>) -> Json<Health> {
    Json(Health::healthy(kind.name()))
}

async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

async fn track_metrics(State(kind): State<ServiceKind>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let start = Instant::now();
    let resp = next.run(req).await;
    common::metrics::record_request(kind.name(), &method, resp.status().as_u16(), start.elapsed().as_secs_f64());
    resp
}

/// `/health` and `/metrics`, served by every service.
fn ops_routes(kind: ServiceKind) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(kind)
}

fn root_route(kind: ServiceKind) -> Router {
    Router::new().route("/", get(root)).with_state(kind)
}

/// Build the orders service router
pub fn build_orders_router(orders: OrderService, cors: CorsLayer) -> Router {
    let app = orders::router(orders)
        .merge(root_route(ServiceKind::Orders))
        .route("/openapi.json", get(|| async { Json(OrdersApiDoc::openapi()) }));
    finish(ServiceKind::Orders, app, cors)
}

/// Build the sales service router
pub fn build_sales_router(sales: SaleService, cors: CorsLayer) -> Router {
    let app = sales::router(sales)
        .merge(root_route(ServiceKind::Sales))
        .route("/openapi.json", get(|| async { Json(SalesApiDoc::openapi()) }));
    finish(ServiceKind::Sales, app, cors)
}

pub fn build_accounts_router(cors: CorsLayer) -> Router {
    finish(ServiceKind::Accounts, accounts::router(), cors)
}

pub fn build_blog_router(cors: CorsLayer) -> Router {
    finish(ServiceKind::Blog, blog::router(), cors)
}

/// Shared tail: ops endpoints, metrics, CORS and request tracing
fn finish(kind: ServiceKind, app: Router, cors: CorsLayer) -> Router {
    app.merge(ops_routes(kind))
        .layer(middleware::from_fn_with_state(kind, track_metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
