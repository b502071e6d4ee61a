//! In-process product store.

use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use catalog_core::{Entity, ProductId};
use catalog_products::{ListMeta, NewProduct, Product, ProductList, ProductPatch, QueryParams};

use crate::store::{ProductStore, StoreError};

/// Product store kept in memory, with the same filtering and pagination
/// semantics as the REST API.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
    next_id: AtomicU64,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already-stored products (insertion order is kept).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().collect()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn poisoned() -> StoreError {
        StoreError::Network("in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self, query: &QueryParams) -> Result<ProductList, StoreError> {
        let products = self.products.read().map_err(|_| Self::poisoned())?;
        let matching: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();

        let per_page = query.page_size().get();
        let skip = (query.page() as usize).saturating_sub(1).saturating_mul(per_page as usize);
        let page = matching
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .map(|p| (*p).clone())
            .collect();

        Ok(ProductList {
            products: page,
            meta: ListMeta {
                total: matching.len() as u64,
                page: query.page(),
                per_page,
            },
        })
    }

    async fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        let products = self.products.read().map_err(|_| Self::poisoned())?;
        products
            .iter()
            .find(|p| p.has_id(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Self::now();
        let created = Product {
            id: ProductId::new(format!("mem-{n}")),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            category: product.category,
            is_active: product.is_active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        };

        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        let product = products
            .iter_mut()
            .find(|p| p.has_id(id))
            .ok_or_else(|| StoreError::not_found(id))?;

        patch.apply_to(product);
        product.updated_at = Self::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.products.write().map_err(|_| Self::poisoned())?;
        let before = products.len();
        products.retain(|p| !p.has_id(id));
        if products.len() == before {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}
