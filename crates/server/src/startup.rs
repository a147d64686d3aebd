use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServiceKind};
use migration::{MigratorTrait, OrdersMigrator, SalesMigrator};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use service::orders::{repo::seaorm::SeaOrmOrderRepository, OrderService};
use service::sales::{repo::seaorm::SeaOrmSaleRepository, SaleService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the service database and make sure its tables exist.
async fn connect_and_migrate<M: MigratorTrait>(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&(&cfg.database).into()).await?;
    M::up(&db, None).await?;
    info!(service = kind.name(), event = "tables_ready", "database tables ensured");
    Ok(db)
}

/// Build the full router for one service, connecting to its database when it has one
pub async fn build_app(kind: ServiceKind, cfg: &AppConfig) -> anyhow::Result<Router> {
    let cors = build_cors();
    let app = match kind {
        ServiceKind::Accounts => routes::build_accounts_router(cors),
        ServiceKind::Blog => routes::build_blog_router(cors),
        ServiceKind::Orders => {
            let db = connect_and_migrate::<OrdersMigrator>(kind, cfg).await?;
            let orders = OrderService::new(Arc::new(SeaOrmOrderRepository { db }));
            routes::build_orders_router(orders, cors)
        }
        ServiceKind::Sales => {
            let db = connect_and_migrate::<SalesMigrator>(kind, cfg).await?;
            let sales = SaleService::new(Arc::new(SeaOrmSaleRepository { db }));
            routes::build_sales_router(sales, cors)
        }
    };
    Ok(app)
}

async fn shutdown_signal(kind: ServiceKind) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(service = kind.name(), event = "shutdown_signal", "shutdown signal received, draining connections");
}

/// Public entry: build the app and serve it until a shutdown signal arrives
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(kind, &cfg).await?;

    let addr: SocketAddr = cfg.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = kind.name(), event = "listening", %addr, "http server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(kind))
        .await?;
    Ok(())
}
