// Product is the only entity of the catalog.
//
// Boundaries
// - No input or output here. Validation is a pure function from a draft to fields.
// - `id` and `version` are never taken from a draft. Only the store assigns them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ProductId = i64;
pub type Version = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub version: Version,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub quantity: u32,
}

impl Product {
    pub fn from_fields(id: ProductId, version: Version, fields: ProductFields) -> Self {
        Self {
            id,
            version,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
        }
    }
}

/// Validated mutable state of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: u32,
}

/// Candidate state as received from a client, every field possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("name must not be blank")]
    BlankName,

    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("quantity must be between 0 and {max}, got {0}", max = u32::MAX)]
    QuantityOutOfRange(i64),

    #[error("version is required")]
    MissingVersion,
}

impl ProductDraft {
    pub fn validate(self) -> Result<ProductFields, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        if name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }

        let price = self.price.ok_or(ValidationError::MissingField("price"))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(ValidationError::NegativePrice(price));
        }

        let quantity = self
            .quantity
            .ok_or(ValidationError::MissingField("quantity"))?;
        let quantity =
            u32::try_from(quantity).map_err(|_| ValidationError::QuantityOutOfRange(quantity))?;

        Ok(ProductFields {
            name,
            description: self.description,
            price,
            quantity,
        })
    }
}
