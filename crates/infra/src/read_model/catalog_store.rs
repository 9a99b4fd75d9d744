use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use catalog_core::{Entity, ProductId};
use catalog_products::Product;

/// Failure reaching the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadModelError {
    #[error("read model lock poisoned")]
    Poisoned,

    #[error("read model unavailable: {0}")]
    Unavailable(String),
}

/// Product catalog storage as seen by the query side.
///
/// Implementations must return `list` in a stable order (the reference
/// in-memory store uses first-insertion order) so repeated listings over
/// unchanged data are identical.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ReadModelError>;
    async fn list(&self) -> Result<Vec<Product>, ReadModelError>;
    /// Insert or replace a product; replacing keeps the original position.
    async fn upsert(&self, product: Product) -> Result<(), ReadModelError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ReadModelError> {
        (**self).get(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, ReadModelError> {
        (**self).list().await
    }

    async fn upsert(&self, product: Product) -> Result<(), ReadModelError> {
        (**self).upsert(product).await
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    order: Vec<ProductId>,
    by_id: HashMap<ProductId, Product>,
}

/// In-memory catalog store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ReadModelError> {
        let state = self.inner.read().map_err(|_| ReadModelError::Poisoned)?;
        Ok(state.by_id.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, ReadModelError> {
        let state = self.inner.read().map_err(|_| ReadModelError::Poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.by_id.get(id).cloned())
            .collect())
    }

    async fn upsert(&self, product: Product) -> Result<(), ReadModelError> {
        let mut state = self.inner.write().map_err(|_| ReadModelError::Poisoned)?;
        let id = product.id().clone();
        if state.by_id.insert(id.clone(), product).is_none() {
            state.order.push(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::{Marketplace, Pricing};

    fn product(id: &str, name: &str) -> Product {
        Product::new(
            ProductId::parse(id).unwrap(),
            format!("SKU-{id}"),
            name,
            Pricing::new(100, "USD"),
            Marketplace::parse("A").unwrap(),
        )
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryCatalogStore::new();
        for id in ["b", "a", "c"] {
            store.upsert(product(id, id)).await.unwrap();
        }

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let store = InMemoryCatalogStore::new();
        store.upsert(product("1", "Old")).await.unwrap();
        store.upsert(product("2", "Other")).await.unwrap();
        store.upsert(product("1", "New")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name(), "New");

        let one = store.get(&ProductId::parse("1").unwrap()).await.unwrap();
        assert_eq!(one.unwrap().name(), "New");
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = InMemoryCatalogStore::new();
        let got = store.get(&ProductId::parse("nope").unwrap()).await.unwrap();
        assert!(got.is_none());
    }
}
