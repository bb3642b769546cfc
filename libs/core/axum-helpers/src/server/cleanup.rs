//! Database connection cleanup utilities.
//!
//! Helpers for properly closing database connections during graceful
//! shutdown.

use tracing::info;

/// Cleanup handler for MongoDB clients.
///
/// Shuts the client down, closing all pooled connections, and logs the
/// operation for observability.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_mongo;
///
/// close_mongo(client, "main").await;
/// ```
pub async fn close_mongo(client: mongodb::Client, name: &str) {
    client.shutdown().await;
    info!("MongoDB connection '{}' closed successfully", name);
}
