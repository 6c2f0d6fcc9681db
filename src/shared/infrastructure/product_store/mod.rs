// Storage port consumed by the version guard.
//
// Responsibilities
// - Describe the narrow set of storage capabilities the guard needs.
// - Conditional writes are single atomic calls. Implementations must compare the
//   stored version and write under the same exclusion, never as a load then a save.

pub mod in_memory;

use crate::modules::products::core::product::{Product, ProductFields, ProductId, Version};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("product {id} not found")]
    NotFound { id: ProductId },

    #[error("version mismatch on product {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: ProductId,
        expected: Version,
        actual: Version,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Persists a new record under a freshly allocated id at the initial version.
    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError>;

    async fn conditional_update(
        &self,
        id: ProductId,
        fields: ProductFields,
        expected_version: Version,
    ) -> Result<Product, StoreError>;

    async fn conditional_delete(
        &self,
        id: ProductId,
        expected_version: Version,
    ) -> Result<(), StoreError>;
}
