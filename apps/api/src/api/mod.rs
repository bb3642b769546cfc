//! Route composition for the products API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::mongodb::{check_health, Client};
use domain_products::repository::ProductRepository;
use domain_products::{handlers, ProductService};

/// All domain routes, nested under `/api` by the app router.
pub fn routes<R>(service: ProductService<R>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new().nest("/products", handlers::router(service))
}

/// Readiness router: `/ready` reports whether MongoDB is reachable.
pub fn ready_router(client: Client) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(client)
}

async fn ready_handler(
    State(client): State<Client>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            if check_health(&client).await {
                Ok(())
            } else {
                Err("MongoDB ping failed".to_string())
            }
        }),
    )];

    run_health_checks(checks).await
}
