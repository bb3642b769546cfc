//! Persistence shape of a product as stored in MongoDB.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Name of the MongoDB collection holding products.
pub const COLLECTION: &str = "products";

/// BSON document shape for the `products` collection.
///
/// `_id` is assigned by the application on insert so the created record
/// can be echoed back without a second round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_id_as_underscore_id() {
        let doc = ProductDocument {
            id: ObjectId::parse_str("659e7e82cdaadd213cf7bdcc").unwrap(),
            name: "Desk".to_string(),
            description: "Oak desk".to_string(),
        };

        let bson_doc = bson::to_document(&doc).unwrap();
        assert!(bson_doc.contains_key("_id"));
        assert_eq!(bson_doc.get_str("name").unwrap(), "Desk");
        assert_eq!(bson_doc.get_str("description").unwrap(), "Oak desk");
    }

    #[test]
    fn test_document_round_trips_through_bson() {
        let doc = ProductDocument {
            id: ObjectId::new(),
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
        };

        let bson_doc = bson::to_document(&doc).unwrap();
        let back: ProductDocument = bson::from_document(bson_doc).unwrap();
        assert_eq!(back, doc);
    }
}
