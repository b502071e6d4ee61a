//! Boundary to the remote product store.

use async_trait::async_trait;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product, ProductList, ProductPatch, QueryParams};

/// The service of record for products.
///
/// Implementations perform exactly one request per call: no retries, no
/// caching, no timeouts beyond what the transport itself enforces.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// `GET /products` with the query's filters and pagination.
    async fn list(&self, query: &QueryParams) -> Result<ProductList, StoreError>;

    /// `GET /products/{id}`.
    async fn get(&self, id: &ProductId) -> Result<Product, StoreError>;

    /// `POST /products`.
    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError>;

    /// `PATCH /products/{id}`.
    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError>;

    /// `DELETE /products/{id}`.
    async fn delete(&self, id: &ProductId) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl StoreError {
    pub fn not_found(id: &ProductId) -> Self {
        StoreError::Api(404, format!("product {id} not found"))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Api(404, _))
    }
}
