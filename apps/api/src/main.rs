//! Products API entry point.
//!
//! Wires configuration, MongoDB, the products domain, and the HTTP server
//! together, then runs until SIGINT/SIGTERM with coordinated cleanup.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum_helpers::{close_mongo, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::connect_from_config_with_retry;
use domain_products::{MongoProductRepository, ProductService};
use eyre::WrapErr;

mod api;
mod config;
mod openapi;

use config::Config;
use openapi::ApiDoc;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    let client = connect_from_config_with_retry(&config.mongo, None)
        .await
        .wrap_err("Failed to connect to MongoDB")?;
    let db = client.database(&config.mongo.database);
    tracing::info!(database = %config.mongo.database, "Connected to MongoDB");

    let repository = Arc::new(MongoProductRepository::new(&db));
    let service = ProductService::new(repository);

    let router = create_router::<ApiDoc>(api::routes(service))
        .await?
        .merge(health_router(config.app))
        .merge(api::ready_router(client.clone()))
        .route("/", get(greeting));

    let cleanup_client = client.clone();
    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            close_mongo(cleanup_client, "main").await;
        },
    )
    .await?;

    Ok(())
}

async fn greeting() -> &'static str {
    "Hello World"
}
