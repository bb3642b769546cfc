use async_trait::async_trait;
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return the stored record
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// List all products (unrestricted query)
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply a partial update, returning the post-update record if it exists
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by id, returning the deleted record if it existed
    async fn delete(&self, id: ObjectId) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ObjectId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let id = ObjectId::new();
        let product = Product {
            id: id.to_hex(),
            name: input.name,
            description: input.description,
        };
        products.insert(id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        // Stable order for callers and tests
        result.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(result)
    }

    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };

        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(Some(updated))
    }

    async fn delete(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let deleted = products.remove(&id);
        if deleted.is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }

        Ok(deleted)
    }
}
