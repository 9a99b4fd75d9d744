//! Catalog ingestion: load products from a JSON seed file into a store.
//!
//! The catalog is owned upstream; this is the hand-off point where an exported
//! snapshot (a JSON array of products) becomes the read model.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use catalog_core::{DomainError, Entity};
use catalog_products::Product;

use crate::read_model::{CatalogStore, ReadModelError};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog record: {0}")]
    Invalid(#[from] DomainError),

    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(String),

    #[error("catalog store rejected record: {0}")]
    Store(#[from] ReadModelError),
}

/// Parse a JSON array of products.
pub fn parse_products(raw: &str) -> Result<Vec<Product>, IngestError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a catalog file.
pub async fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, IngestError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?;
    parse_products(&raw)
}

/// Validate `products` and upsert them in order.
///
/// Validation runs over the whole batch before anything is written, so a bad
/// record leaves the store untouched. Returns the number of products ingested.
pub async fn seed_catalog<S>(store: &S, products: Vec<Product>) -> Result<usize, IngestError>
where
    S: CatalogStore + ?Sized,
{
    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        product.validate()?;
        if !seen.insert(product.id().clone()) {
            return Err(IngestError::DuplicateId(product.id().to_string()));
        }
    }

    let count = products.len();
    for product in products {
        store.upsert(product).await?;
    }
    tracing::info!(count, "catalog seeded");
    Ok(count)
}
