// Command data type for replacing the state of a product.
//
// Responsibilities
// - Carry the proposed state and the version the caller last read.
// - `claimed_version` stays optional here so that a missing claim is rejected by the
//   guard rather than by whichever transport built the command.

use crate::modules::products::core::product::{ProductDraft, ProductId, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub id: ProductId,
    pub draft: ProductDraft,
    pub claimed_version: Option<Version>,
}
