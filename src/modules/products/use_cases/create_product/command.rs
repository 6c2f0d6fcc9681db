// Command data type for creating a product.
//
// Responsibilities
// - Carry the candidate state only. A version is never part of a create.

use crate::modules::products::core::product::ProductDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub draft: ProductDraft,
}
