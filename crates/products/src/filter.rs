//! Listing filter: optional free-text search and marketplace constraint.

use crate::product::{fold_case, Marketplace, Product};

/// Constraints applied to a catalog listing.
///
/// Both fields are optional; an absent field applies no constraint, so
/// `ProductFilter::default()` matches the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search: Option<String>,
    marketplace: Option<Marketplace>,
}

impl ProductFilter {
    /// Filter that matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw query values.
    ///
    /// Blank values are treated as absent (`?search=` does not filter). Any
    /// other search term is kept verbatim, surrounding whitespace included.
    pub fn from_raw(search: Option<&str>, marketplace: Option<&str>) -> Self {
        let marketplace = marketplace.and_then(|m| Marketplace::parse(m).ok());
        Self {
            search: search.and_then(non_blank),
            marketplace,
        }
    }

    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = non_blank(search.as_ref());
        self
    }

    pub fn with_marketplace(mut self, marketplace: Marketplace) -> Self {
        self.marketplace = Some(marketplace);
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn marketplace(&self) -> Option<&Marketplace> {
        self.marketplace.as_ref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.marketplace.is_none()
    }

    /// Whether `product` satisfies every present constraint.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_needle(product, self.needle().as_deref())
    }

    /// Keep the matching products, preserving input order.
    pub fn apply(&self, products: impl IntoIterator<Item = Product>) -> Vec<Product> {
        let needle = self.needle();
        products
            .into_iter()
            .filter(|p| self.matches_with_needle(p, needle.as_deref()))
            .collect()
    }

    fn needle(&self) -> Option<String> {
        self.search.as_deref().map(fold_case)
    }

    fn matches_with_needle(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(m) = &self.marketplace {
            if product.marketplace() != m {
                return false;
            }
        }
        match needle {
            Some(n) => product.text_contains(n),
            None => true,
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw.to_string()) }
}
