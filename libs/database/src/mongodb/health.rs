use mongodb::Client;
use std::time::Instant;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a lightweight round trip
///
/// # Example
/// ```ignore
/// use database::mongodb::{check_health, connect};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let healthy = check_health(&client).await;
/// ```
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}

/// Check MongoDB health with detailed status
///
/// Returns timing information and any error messages.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();

    match client.list_database_names().await {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
        },
    }
}
