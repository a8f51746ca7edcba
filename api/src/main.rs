//! Shops API Server
//!
//! A small storefront catalog: shops sell products, and orders collect line
//! items for those products. Uses hexagonal (ports & adapters) architecture
//! for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::{
    create_schema, ClockOrderNumberGenerator, PostgresLineItemRepository,
    PostgresOrderRepository, PostgresProductRepository, PostgresShopRepository,
};
use app::{CatalogService, OrderService, ShopService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub shop_service: Arc<ShopService<PostgresShopRepository>>,
    pub catalog_service: Arc<CatalogService<PostgresProductRepository, PostgresShopRepository>>,
    pub order_service: Arc<
        OrderService<
            PostgresOrderRepository,
            PostgresLineItemRepository,
            PostgresProductRepository,
            ClockOrderNumberGenerator,
        >,
    >,
}

impl AppState {
    /// Wire the PostgreSQL adapters into the application services
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        let shop_repo = Arc::new(PostgresShopRepository::new(db.clone()));
        let product_repo = Arc::new(PostgresProductRepository::new(db.clone()));
        let line_item_repo = Arc::new(PostgresLineItemRepository::new(db.clone()));
        let order_repo = Arc::new(PostgresOrderRepository::new(db));

        Self {
            shop_service: Arc::new(ShopService::new(shop_repo.clone())),
            catalog_service: Arc::new(CatalogService::new(product_repo.clone(), shop_repo)),
            order_service: Arc::new(OrderService::new(
                order_repo,
                line_item_repo,
                product_repo,
                Arc::new(ClockOrderNumberGenerator),
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
fn router(state: AppState, cors_allow_any: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .route("/shops", get(handlers::list_shops))
        .route("/shops/:shop_id", get(handlers::get_shop))
        .route("/shops/:shop_id/products", get(handlers::list_products))
        .route(
            "/shops/:shop_id/products/:product_id",
            get(handlers::get_product),
        )
        .route("/shops/:shop_id/orders", get(handlers::list_orders))
        .route("/shops/:shop_id/orders/:order_id", get(handlers::get_order))
        .route(
            "/shops/:shop_id/line-items/:line_item_id",
            get(handlers::get_line_item),
        );

    let app = if cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,shops_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shops API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.init_schema {
        create_schema(&db)
            .await
            .context("Failed to create schema")?;
    }

    let app = router(AppState::new(db), config.cors_allow_any);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
