//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// Combines string identifiers (for clients), integer codes (for
/// monitoring), and default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid ObjectId format in path parameter
    InvalidObjectId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// JSON serialization failed
    SerdeJsonError,

    /// I/O error
    IoError,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,
}

impl ErrorCode {
    /// String identifier for client consumption
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidObjectId => "INVALID_OBJECT_ID",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logging and monitoring
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidObjectId => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1005,
            ErrorCode::ServiceUnavailable => 1006,
            ErrorCode::SerdeJsonError => 1007,
            ErrorCode::IoError => 1008,
            ErrorCode::DatabaseError => 2001,
        }
    }

    /// Default human-readable message
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidObjectId => "Invalid object id format",
            ErrorCode::JsonExtraction => "Invalid JSON in request body",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::SerdeJsonError => "Failed to serialize response",
            ErrorCode::IoError => "An I/O error occurred",
            ErrorCode::DatabaseError => "A database error occurred",
        }
    }
}
