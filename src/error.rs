//! Catalog error types.
//!
//! The query pipeline itself is total and never fails; these errors only
//! arise at the store boundary (lookups and inserts).

use thiserror::Error;

/// Errors that can occur in catalog store operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found by ID.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product not found by slug.
    #[error("No product with slug: {0}")]
    SlugNotFound(String),

    /// Attempted to insert a product whose ID already exists.
    #[error("Duplicate product ID: {0}")]
    DuplicateId(String),

    /// Attempted to insert a product whose slug already exists.
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
