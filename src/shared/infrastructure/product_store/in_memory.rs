// In memory implementation of the ProductStore port.
//
// Purpose
// - Support guard tests and local development without a database.
//
// Responsibilities
// - Keep products in a table keyed by id, ids allocated from a counter that never rewinds.
// - Enforce optimistic concurrency by checking the expected version while holding the write lock.

use crate::modules::products::core::product::{Product, ProductFields, ProductId, Version};
use crate::modules::products::core::versioning::{self, INITIAL_VERSION, VersionMismatch};
use crate::shared::infrastructure::product_store::{ProductStore, StoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    last_id: ProductId,
    rows: BTreeMap<ProductId, Product>,
}

#[derive(Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Table>,
    is_offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stretches every conditional write while the lock is held.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Product store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let ms = self.delay_write_ms.load(Ordering::Relaxed);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

fn mismatch(id: ProductId, VersionMismatch { expected, actual }: VersionMismatch) -> StoreError {
    StoreError::VersionMismatch {
        id,
        expected,
        actual,
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, fields: ProductFields) -> Result<Product, StoreError> {
        self.ensure_online()?;
        let mut table = self.inner.write().await;
        table.last_id += 1;
        let product = Product::from_fields(table.last_id, INITIAL_VERSION, fields);
        table.rows.insert(product.id, product.clone());
        tracing::debug!(id = product.id, "product inserted");
        Ok(product)
    }

    async fn conditional_update(
        &self,
        id: ProductId,
        fields: ProductFields,
        expected_version: Version,
    ) -> Result<Product, StoreError> {
        self.ensure_online()?;
        let mut table = self.inner.write().await;
        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        let next = versioning::advance(row.version, expected_version).map_err(|m| mismatch(id, m))?;
        self.delay_write().await;
        *row = Product::from_fields(id, next, fields);
        tracing::debug!(id, version = next, "product updated");
        Ok(row.clone())
    }

    async fn conditional_delete(
        &self,
        id: ProductId,
        expected_version: Version,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut table = self.inner.write().await;
        let row = table.rows.get(&id).ok_or(StoreError::NotFound { id })?;
        versioning::check(row.version, expected_version).map_err(|m| mismatch(id, m))?;
        self.delay_write().await;
        table.rows.remove(&id);
        tracing::debug!(id, version = expected_version, "product deleted");
        Ok(())
    }
}
