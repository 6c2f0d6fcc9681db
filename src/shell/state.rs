use crate::modules::products::application::version_guard::ProductVersionGuard;
use crate::shared::infrastructure::product_store::in_memory::InMemoryProductStore;
use std::sync::Arc;

pub type ProductCatalog = ProductVersionGuard<InMemoryProductStore>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    pub fn with_store(store: Arc<InMemoryProductStore>) -> Self {
        Self {
            catalog: Arc::new(ProductVersionGuard::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryProductStore::new()))
    }
}
