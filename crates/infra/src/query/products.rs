use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::{Product, ProductFilter};

use crate::read_model::{CatalogStore, ReadModelError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("product {0} not found")]
    NotFound(ProductId),

    #[error("failed to retrieve products: {0}")]
    Retrieval(#[from] ReadModelError),
}

/// Read-only listing and lookup over a [`CatalogStore`].
///
/// Stateless between calls: every invocation reads the store afresh, and
/// store failures are surfaced as [`QueryError::Retrieval`] without retrying.
#[derive(Debug, Clone)]
pub struct ProductQueryService<S> {
    store: S,
}

impl<S> ProductQueryService<S>
where
    S: CatalogStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// List products matching `filter`, in catalog order.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, QueryError> {
        let all = self.store.list().await?;
        let total = all.len();
        let matched = filter.apply(all);
        tracing::debug!(
            search = filter.search(),
            marketplace = filter.marketplace().map(|m| m.as_str()),
            total,
            matched = matched.len(),
            "listed products"
        );
        Ok(matched)
    }

    /// Look up exactly one product.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, QueryError> {
        match self.store.get(id).await? {
            Some(product) => Ok(product),
            None => {
                tracing::debug!(product_id = %id, "product not found");
                Err(QueryError::NotFound(id.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use catalog_core::Entity;
    use catalog_products::{Marketplace, Pricing};

    use crate::read_model::InMemoryCatalogStore;

    fn product(id: &str, name: &str, marketplace: &str) -> Product {
        Product::new(
            ProductId::parse(id).unwrap(),
            format!("SKU-{id}"),
            name,
            Pricing::new(1500, "USD"),
            Marketplace::parse(marketplace).unwrap(),
        )
    }

    async fn sample_service() -> ProductQueryService<Arc<InMemoryCatalogStore>> {
        let store = Arc::new(InMemoryCatalogStore::new());
        store.upsert(product("1", "Red Mug", "A")).await.unwrap();
        store.upsert(product("2", "Blue Mug", "B")).await.unwrap();
        ProductQueryService::new(store)
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id().as_str()).collect()
    }

    /// Store that fails every call, standing in for an unreachable backend.
    struct UnavailableStore;

    #[async_trait]
    impl CatalogStore for UnavailableStore {
        async fn get(&self, _id: &ProductId) -> Result<Option<Product>, ReadModelError> {
            Err(ReadModelError::Unavailable("connection refused".to_string()))
        }

        async fn list(&self) -> Result<Vec<Product>, ReadModelError> {
            Err(ReadModelError::Unavailable("connection refused".to_string()))
        }

        async fn upsert(&self, _product: Product) -> Result<(), ReadModelError> {
            Err(ReadModelError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn list_without_filter_returns_full_catalog() {
        let svc = sample_service().await;
        let out = svc.list_products(&ProductFilter::all()).await.unwrap();
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn list_by_search_matches_both_mugs() {
        let svc = sample_service().await;
        let out = svc
            .list_products(&ProductFilter::all().with_search("mug"))
            .await
            .unwrap();
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn list_by_marketplace_returns_only_that_channel() {
        let svc = sample_service().await;
        let filter = ProductFilter::all().with_marketplace(Marketplace::parse("A").unwrap());
        let out = svc.list_products(&filter).await.unwrap();
        assert_eq!(ids(&out), vec!["1"]);
    }

    #[tokio::test]
    async fn list_is_stable_across_calls() {
        let svc = sample_service().await;
        let first = svc.list_products(&ProductFilter::all()).await.unwrap();
        let second = svc.list_products(&ProductFilter::all()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn get_returns_product_with_same_id() {
        let svc = sample_service().await;
        let id = ProductId::parse("2").unwrap();
        let got = svc.get_product(&id).await.unwrap();
        assert_eq!(got.id(), &id);
        assert_eq!(got.name(), "Blue Mug");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let svc = sample_service().await;
        let id = ProductId::parse("99").unwrap();
        assert_eq!(svc.get_product(&id).await, Err(QueryError::NotFound(id)));
    }

    #[tokio::test]
    async fn lookup_and_listing_share_identifier_space() {
        let svc = sample_service().await;
        for listed in svc.list_products(&ProductFilter::all()).await.unwrap() {
            let fetched = svc.get_product(listed.id()).await.unwrap();
            assert_eq!(fetched, listed);
        }
    }

    #[tokio::test]
    async fn store_failures_surface_as_retrieval_errors() {
        let svc = ProductQueryService::new(UnavailableStore);

        let err = svc.list_products(&ProductFilter::all()).await.unwrap_err();
        assert!(matches!(err, QueryError::Retrieval(ReadModelError::Unavailable(_))));

        let err = svc
            .get_product(&ProductId::parse("1").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Retrieval(_)));
    }
}
