// Shared test fixture for the CreateProduct command.
// The default candidate is read from json/create_product.json, the same shape a
// client posts to the REST endpoint.

use crate::modules::products::core::product::ProductDraft;
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use rust_decimal::Decimal;
use std::fs;

pub const CREATE_PRODUCT_JSON: &str = "./src/tests/fixtures/commands/json/create_product.json";

pub struct CreateProductBuilder {
    inner: ProductDraft,
}

impl Default for CreateProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateProductBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(CREATE_PRODUCT_JSON).unwrap();
        let draft: ProductDraft = serde_json::from_str(&json_str).unwrap();
        Self { inner: draft }
    }

    pub fn name(mut self, v: Option<String>) -> Self {
        self.inner.name = v;
        self
    }

    pub fn description(mut self, v: Option<String>) -> Self {
        self.inner.description = v;
        self
    }

    pub fn price(mut self, v: Option<Decimal>) -> Self {
        self.inner.price = v;
        self
    }

    pub fn quantity(mut self, v: Option<i64>) -> Self {
        self.inner.quantity = v;
        self
    }

    pub fn build(self) -> CreateProduct {
        CreateProduct { draft: self.inner }
    }
}

#[cfg(test)]
mod create_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateProductBuilder::default().build();
        assert_eq!(built.draft.name.as_deref(), Some("Smartphone"));
        assert_eq!(built.draft.price, Some(Decimal::new(79999, 2)));
        assert_eq!(built.draft.quantity, Some(50));
        assert!(built.draft.description.is_some());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateProductBuilder::new()
            .name(Some("Laptop".into()))
            .description(None)
            .price(Some(Decimal::new(1299, 0)))
            .quantity(Some(3))
            .build();
        assert_eq!(
            custom.draft,
            ProductDraft {
                name: Some("Laptop".into()),
                description: None,
                price: Some(Decimal::new(1299, 0)),
                quantity: Some(3),
            }
        );
    }
}
