use crate::modules::products::core::product::{ProductId, ValidationError, Version};
use crate::shared::infrastructure::product_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("product {id} not found")]
    NotFound { id: ProductId },

    #[error(
        "version conflict on product {id}: claimed version {claimed}, stored version {stored}; re-read and retry"
    )]
    VersionConflict {
        id: ProductId,
        claimed: Version,
        stored: Version,
    },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApplicationError::NotFound { id },
            StoreError::VersionMismatch {
                id,
                expected,
                actual,
            } => ApplicationError::VersionConflict {
                id,
                claimed: expected,
                stored: actual,
            },
            backend => ApplicationError::Store(backend),
        }
    }
}
