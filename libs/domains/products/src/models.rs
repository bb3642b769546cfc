use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::ProductDocument;

/// Product entity - a catalog product as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (24-character hex ObjectId)
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
}

/// DTO for updating an existing product
///
/// Partial replacement semantics: only the provided fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
}

impl UpdateProduct {
    /// True when the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Product {
    /// Create a new product from a CreateProduct DTO, assigning a fresh id
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new().to_hex(),
            name: input.name,
            description: input.description,
        }
    }

    /// Apply updates from an UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            description: doc.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_assigns_id() {
        let product = Product::new(CreateProduct {
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        });

        assert_eq!(product.id.len(), 24);
        assert!(ObjectId::parse_str(&product.id).is_ok());
        assert_eq!(product.name, "Desk");
        assert_eq!(product.description, "Oak desk");
    }

    #[test]
    fn test_apply_update_partial_fields() {
        let mut product = Product::new(CreateProduct {
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        });

        product.apply_update(UpdateProduct {
            name: Some("Standing desk".to_string()),
            description: None,
        });

        assert_eq!(product.name, "Standing desk");
        assert_eq!(product.description, "Oak desk");
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateProduct::default().is_empty());
        assert!(!UpdateProduct {
            name: Some("x".to_string()),
            description: None,
        }
        .is_empty());
    }

    #[test]
    fn test_create_product_validation() {
        use validator::Validate;

        let valid = CreateProduct {
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateProduct {
            name: String::new(),
            description: "Oak desk".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_update_product_validation_rejects_empty_strings() {
        use validator::Validate;

        let invalid = UpdateProduct {
            name: Some(String::new()),
            description: None,
        };
        assert!(invalid.validate().is_err());

        let valid = UpdateProduct {
            name: None,
            description: Some("Updated".to_string()),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_product_from_document_renders_hex_id() {
        let oid = ObjectId::parse_str("659e7e82cdaadd213cf7bdcc").unwrap();
        let product: Product = ProductDocument {
            id: oid,
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        }
        .into();

        assert_eq!(product.id, "659e7e82cdaadd213cf7bdcc");
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: "659e7e82cdaadd213cf7bdcc".to_string(),
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "659e7e82cdaadd213cf7bdcc");
        assert_eq!(json["name"], "Desk");
        assert_eq!(json["description"], "Oak desk");
    }
}
