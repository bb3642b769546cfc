//! Database library providing the MongoDB connector and utilities.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(&config.database);
//! ```

pub mod common;
pub mod mongodb;

pub use mongodb::{MongoConfig, MongoError};
