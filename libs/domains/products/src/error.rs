use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ObjectId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id.to_hex()))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_response_is_404() {
        let err = ProductError::NotFound(ObjectId::new());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_response_is_400() {
        let err = ProductError::Validation("name must not be empty".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
