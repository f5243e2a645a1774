//! # Core Library
//!
//! Configuration, centralized error handling, and database pool for the API service.

pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use store::{create_pool, DbPool};
