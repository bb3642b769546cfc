use bson::oid::ObjectId;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for product operations
///
/// Validates inputs and translates repository `Option`s into typed errors;
/// persistence details stay behind the [`ProductRepository`] trait.
#[derive(Debug, Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    pub async fn update_product(
        &self,
        id: ObjectId,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn sample_product() -> Product {
        Product {
            id: "659e7e82cdaadd213cf7bdcc".to_string(),
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_product_delegates_to_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Ok(sample_product()));

        let service = ProductService::new(Arc::new(repo));
        let product = service
            .create_product(CreateProduct {
                name: "Desk".to_string(),
                description: "Oak desk".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Desk");
    }

    #[tokio::test]
    async fn test_create_product_rejects_empty_name() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().times(0);

        let service = ProductService::new(Arc::new(repo));
        let result = service
            .create_product(CreateProduct {
                name: String::new(),
                description: "Oak desk".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(Some(sample_product())));

        let service = ProductService::new(Arc::new(repo));
        let product = service.get_product(ObjectId::new()).await.unwrap();
        assert_eq!(product.id, "659e7e82cdaadd213cf7bdcc");
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repo));
        let result = service.get_product(ObjectId::new()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_products() {
        let mut repo = MockProductRepository::new();
        repo.expect_list().returning(|| Ok(vec![sample_product()]));

        let service = ProductService::new(Arc::new(repo));
        let products = service.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_update_product_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(Arc::new(repo));
        let result = service
            .update_product(ObjectId::new(), UpdateProduct::default())
            .await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_product_rejects_empty_field_value() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().times(0);

        let service = ProductService::new(Arc::new(repo));
        let result = service
            .update_product(
                ObjectId::new(),
                UpdateProduct {
                    name: Some(String::new()),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_product_returns_deleted_record() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .returning(|_| Ok(Some(sample_product())));

        let service = ProductService::new(Arc::new(repo));
        let product = service.delete_product(ObjectId::new()).await.unwrap();
        assert_eq!(product.name, "Desk");
    }

    #[tokio::test]
    async fn test_delete_product_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repo));
        let result = service.delete_product(ObjectId::new()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
