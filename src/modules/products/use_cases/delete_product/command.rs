use crate::modules::products::core::product::{ProductId, Version};

/// Removes a product, guarded by the version the caller last read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProduct {
    pub id: ProductId,
    pub claimed_version: Option<Version>,
}
