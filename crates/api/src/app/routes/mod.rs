use axum::Router;

pub mod products;
pub mod system;

/// Route table for the catalog endpoints.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
