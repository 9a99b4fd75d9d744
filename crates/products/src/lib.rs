//! Products domain module (read-only catalog).
//!
//! This crate contains the catalog record shape and the listing filter rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod product;

pub use filter::ProductFilter;
pub use product::{Marketplace, Pricing, Product};
