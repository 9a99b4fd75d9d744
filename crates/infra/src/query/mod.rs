//! Query services over the catalog read model.

pub mod products;

pub use products::{ProductQueryService, QueryError};
