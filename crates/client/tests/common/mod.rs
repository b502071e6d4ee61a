#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use catalog_client::{InMemoryProductStore, ProductStore, StoreError};
use catalog_core::ProductId;
use catalog_products::{
    NewProduct, Product, ProductCategory, ProductList, ProductPatch, QueryParams,
};

/// In-memory store with call counters, per-query latency and injectable failures.
#[derive(Default)]
pub struct ScriptedStore {
    inner: InMemoryProductStore,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    list_delays: Mutex<HashMap<Option<String>, Duration>>,
    failing_list_names: Mutex<Vec<Option<String>>>,
    fail_lists: AtomicBool,
    fail_deletes: AtomicBool,
}

impl ScriptedStore {
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: InMemoryProductStore::with_products(products),
            ..Self::default()
        }
    }

    /// Delay list responses for queries whose name filter is `name`.
    pub fn delay_list_for(&self, name: Option<&str>, delay: Duration) {
        self.list_delays
            .lock()
            .unwrap()
            .insert(name.map(str::to_string), delay);
    }

    /// Fail list requests whose name filter is `name`.
    pub fn fail_list_for(&self, name: Option<&str>) {
        self.failing_list_names
            .lock()
            .unwrap()
            .push(name.map(str::to_string));
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_lists.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn lists(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.lists()
            + self.get_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.update_calls.load(Ordering::SeqCst)
            + self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.inner.len()
    }

    /// Yield until at least `n` list requests have been issued.
    pub async fn wait_for_lists(&self, n: usize) {
        while self.lists() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ProductStore for ScriptedStore {
    async fn list(&self, query: &QueryParams) -> Result<ProductList, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let key = query.name().map(str::to_string);

        let delay = self.list_delays.lock().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted_failure = self.failing_list_names.lock().unwrap().contains(&key);
        if scripted_failure || self.fail_lists.load(Ordering::SeqCst) {
            return Err(StoreError::Api(500, "list exploded".to_string()));
        }
        self.inner.list(query).await
    }

    async fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(product).await
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StoreError::Network("connection reset".to_string()));
        }
        self.inner.delete(id).await
    }
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
        price: "9.99".parse().unwrap(),
        category: ProductCategory::Grocery,
        is_active: true,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}
