//! MongoDB-backed implementation of [`ProductRepository`].

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::entity::{ProductDocument, COLLECTION};
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of ProductRepository
///
/// Holds a typed collection handle; the underlying `Client` is shared and
/// pooled by the driver, so this struct is cheap to clone.
#[derive(Debug, Clone)]
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let document = ProductDocument {
            id: ObjectId::new(),
            name: input.name,
            description: input.description,
        };

        self.collection.insert_one(&document).await?;

        tracing::info!(product_id = %document.id, "Created product");
        Ok(document.into())
    }

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Product::from))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        if input.is_empty() {
            // $set with an empty document is rejected by the server
            return self.get_by_id(id).await;
        }

        let mut set = Document::new();
        if let Some(name) = input.name {
            set.insert("name", name);
        }
        if let Some(description) = input.description {
            set.insert("description", description);
        }

        let document = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        if document.is_some() {
            tracing::info!(product_id = %id, "Updated product");
        }
        Ok(document.map(Product::from))
    }

    async fn delete(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?;

        if document.is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(document.map(Product::from))
    }
}
