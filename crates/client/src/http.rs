//! HTTP implementation of the product store.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product, ProductList, ProductPatch, QueryParams};

use crate::config::ClientConfig;
use crate::store::{ProductStore, StoreError};

/// Talks to the catalog REST API (`/products`).
#[derive(Debug, Clone)]
pub struct HttpProductStore {
    client: Client,
    api_url: Url,
}

impl HttpProductStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing `reqwest::Client` (connection pool, proxies, ...).
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_url().clone(),
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Network(format!("API URL {} cannot take a path", self.api_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request; any non-2xx status becomes `StoreError::Api`.
    async fn send(&self, op: &'static str, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(op, error = %e, "product store unreachable");
            StoreError::Network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(op, status = status.as_u16(), "product store rejected request");
            return Err(StoreError::Api(status.as_u16(), body));
        }

        Ok(resp)
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list(&self, query: &QueryParams) -> Result<ProductList, StoreError> {
        let url = self.url(&["products"])?;
        let req = self.client.get(url).query(&query.to_query_pairs());
        let resp = self.send("list", req).await?;
        Self::read_json(resp).await
    }

    async fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        let url = self.url(&["products", id.as_str()])?;
        let resp = self.send("get", self.client.get(url)).await?;
        Self::read_json(resp).await
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let url = self.url(&["products"])?;
        let resp = self.send("create", self.client.post(url).json(product)).await?;
        Self::read_json(resp).await
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        let url = self.url(&["products", id.as_str()])?;
        let resp = self.send("update", self.client.patch(url).json(patch)).await?;
        Self::read_json(resp).await
    }

    async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        let url = self.url(&["products", id.as_str()])?;
        self.send("delete", self.client.delete(url)).await?;
        Ok(())
    }
}
