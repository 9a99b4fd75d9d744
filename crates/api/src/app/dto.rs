use serde::Deserialize;

use catalog_core::Entity;
use catalog_products::{Product, ProductFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Query string of `GET /products`; absent (or blank) fields apply no filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub search: Option<String>,
    pub marketplace: Option<String>,
}

impl ListProductsQuery {
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter::from_raw(self.search.as_deref(), self.marketplace.as_deref())
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id().as_str(),
        "sku": p.sku(),
        "name": p.name(),
        "description": p.description(),
        "price": {
            "amount": p.pricing().amount,
            "currency": p.pricing().currency,
        },
        "marketplace": p.marketplace().as_str(),
    })
}
