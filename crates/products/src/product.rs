use serde::Deserialize;

use catalog_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Sales-channel tag partitioning the catalog.
///
/// Matching on marketplaces is exact: `"EU"` and `"eu"` are different channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Marketplace(String);

impl Marketplace {
    pub fn parse(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("marketplace must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Marketplace {}

impl core::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Marketplace {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Display price of a product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pricing {
    pub amount: u64,      // Price in smallest currency unit (e.g., cents)
    pub currency: String, // ISO currency code (e.g., "USD", "EUR")
}

impl ValueObject for Pricing {}

impl Pricing {
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    fn validate(&self) -> DomainResult<()> {
        let valid = self.currency.len() == 3 && self.currency.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(DomainError::validation(format!(
                "currency must be a 3-letter ISO code, got {:?}",
                self.currency
            )));
        }
        Ok(())
    }
}

/// A catalog product as seen by the read side.
///
/// Products are created and updated by the upstream catalog ingestion process;
/// this type is only ever deserialized from a catalog snapshot, read and
/// filtered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "price")]
    pricing: Pricing,
    marketplace: Marketplace,
}

impl Product {
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        pricing: Pricing,
        marketplace: Marketplace,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            name: name.into(),
            description: None,
            pricing,
            marketplace,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn marketplace(&self) -> &Marketplace {
        &self.marketplace
    }

    /// Check the record invariants that serde alone cannot express.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!("product {}: name is required", self.id)));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation(format!("product {}: sku is required", self.id)));
        }
        self.pricing.validate()
    }

    /// Whether any searchable field contains `needle`.
    ///
    /// `needle` must already be folded with [`fold_case`]; the fields are
    /// folded here.
    pub fn text_contains(&self, needle: &str) -> bool {
        fold_case(&self.name).contains(needle)
            || fold_case(&self.sku).contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| fold_case(d).contains(needle))
    }
}

/// Lowercase `s` one character at a time.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς`, so a lowercased
/// substring would not always be a substring of the lowercased whole.
/// Folding per character keeps that relation intact.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
