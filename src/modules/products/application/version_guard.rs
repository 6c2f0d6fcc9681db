// Optimistic version guard over the product store.
//
// Responsibilities
// - Validate candidate state before it reaches the store.
// - Require a version claim on every mutation of an existing product.
// - Delegate the compare and the write to one conditional store call, and surface
//   mismatches as conflicts. Never retries and never caches a record.

use crate::modules::products::application::errors::ApplicationError;
use crate::modules::products::core::product::{Product, ProductId, ValidationError};
use crate::modules::products::use_cases::create_product::command::CreateProduct;
use crate::modules::products::use_cases::delete_product::command::DeleteProduct;
use crate::modules::products::use_cases::update_product::command::UpdateProduct;
use crate::shared::infrastructure::product_store::ProductStore;
use std::sync::Arc;

pub struct ProductVersionGuard<TStore>
where
    TStore: ProductStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ProductVersionGuard<TStore>
where
    TStore: ProductStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApplicationError> {
        Ok(self.store.list().await?)
    }

    pub async fn read(&self, id: ProductId) -> Result<Product, ApplicationError> {
        self.store
            .get(id)
            .await?
            .ok_or(ApplicationError::NotFound { id })
    }

    pub async fn create(&self, command: CreateProduct) -> Result<Product, ApplicationError> {
        let fields = command.draft.validate()?;
        let product = self.store.insert(fields).await?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    pub async fn update(&self, command: UpdateProduct) -> Result<Product, ApplicationError> {
        let claimed = command
            .claimed_version
            .ok_or(ValidationError::MissingVersion)?;
        let fields = command.draft.validate()?;

        match self
            .store
            .conditional_update(command.id, fields, claimed)
            .await
            .map_err(ApplicationError::from)
        {
            Ok(product) => {
                tracing::info!(id = product.id, version = product.version, "product updated");
                Ok(product)
            }
            Err(error) => Err(log_rejection(error)),
        }
    }

    pub async fn delete(&self, command: DeleteProduct) -> Result<(), ApplicationError> {
        let claimed = command
            .claimed_version
            .ok_or(ValidationError::MissingVersion)?;

        self.store
            .conditional_delete(command.id, claimed)
            .await
            .map_err(|error| log_rejection(error.into()))?;
        tracing::info!(id = command.id, version = claimed, "product deleted");
        Ok(())
    }
}

fn log_rejection(error: ApplicationError) -> ApplicationError {
    match &error {
        ApplicationError::VersionConflict {
            id,
            claimed,
            stored,
        } => tracing::warn!(id, claimed, stored, "version conflict"),
        ApplicationError::Store(cause) => tracing::error!(%cause, "product store failure"),
        _ => {}
    }
    error
}
