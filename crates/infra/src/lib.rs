//! Infrastructure layer: catalog storage, ingestion, query services, config.

pub mod config;
pub mod ingest;
pub mod query;
pub mod read_model;
