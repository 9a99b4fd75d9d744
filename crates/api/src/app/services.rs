use std::sync::Arc;

use catalog_core::ProductId;
use catalog_infra::{
    config::CatalogConfig,
    ingest::{self, IngestError},
    query::{ProductQueryService, QueryError},
    read_model::{CatalogStore, InMemoryCatalogStore},
};
use catalog_products::{Product, ProductFilter};

/// Shared store handle; any `CatalogStore` backend can sit behind it.
pub type SharedCatalogStore = Arc<dyn CatalogStore>;

/// Everything the handlers need, built once at startup.
#[derive(Clone)]
pub struct AppServices {
    products: ProductQueryService<SharedCatalogStore>,
}

impl AppServices {
    pub fn new(store: SharedCatalogStore) -> Self {
        Self {
            products: ProductQueryService::new(store),
        }
    }

    /// Empty in-memory catalog (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCatalogStore::new()))
    }

    /// In-memory catalog, seeded from `CATALOG_SEED_PATH` when configured.
    pub async fn from_config(config: &CatalogConfig) -> Result<Self, IngestError> {
        let services = Self::in_memory();
        if let Some(path) = &config.seed_path {
            let products = ingest::load_products(path).await?;
            services.seed(products).await?;
        }
        Ok(services)
    }

    pub async fn seed(&self, products: Vec<Product>) -> Result<usize, IngestError> {
        ingest::seed_catalog(self.products.store(), products).await
    }

    pub async fn products_list(&self, filter: &ProductFilter) -> Result<Vec<Product>, QueryError> {
        self.products.list_products(filter).await
    }

    pub async fn products_get(&self, id: &ProductId) -> Result<Product, QueryError> {
        self.products.get_product(id).await
    }
}
