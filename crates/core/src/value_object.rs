//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two prices of `1250 EUR` are
/// interchangeable, while two products with equal names are not.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Marketplace(String);
///
/// impl ValueObject for Marketplace {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
