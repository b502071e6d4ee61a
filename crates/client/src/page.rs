//! Page-level controller for the product list.
//!
//! `CatalogPage` owns the list view's state container:
//! - the current `QueryParams` (the only source of "which page/filter is active")
//! - the fetched list and its derived pagination
//! - the delete confirmation flow and the details panel
//!
//! Every query change triggers a fetch. Each fetch takes the next generation
//! number, and a response is applied only if its generation is still the
//! latest one, so the most recently issued request always wins no matter in
//! which order responses arrive.

use std::sync::Arc;

use tokio::sync::Mutex;

use catalog_core::{DomainError, ProductId};
use catalog_products::{Pagination, Product, QueryChange, QueryParams};

use crate::messages;
use crate::state::{DeleteState, ListState, PageSnapshot};
use crate::store::{ProductStore, StoreError};

/// How a single list fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the visible list.
    Applied,
    /// A newer fetch was issued meanwhile; the response was discarded.
    Stale,
    /// The store call failed; the previous list is kept and an error is shown.
    Failed,
}

/// How `confirm_delete` ended.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// No delete was awaiting confirmation.
    NothingPending,
    /// The store deleted the product and the list was refetched once.
    Deleted { id: ProductId, refresh: FetchOutcome },
    /// The store call failed; the list is unchanged.
    Failed { id: ProductId, error: StoreError },
}

#[derive(Debug)]
struct PageInner {
    query: QueryParams,
    generation: u64,
    list: ListState,
    delete: DeleteState,
    details: Option<Product>,
}

impl PageInner {
    /// Start a fetch for the current query (caller holds the lock).
    fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.list.loading = true;
        self.list.error = None;
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }
}

#[derive(Debug)]
struct FetchTicket {
    generation: u64,
    query: QueryParams,
}

/// State container of the product list page.
pub struct CatalogPage<S: ProductStore + ?Sized> {
    store: Arc<S>,
    inner: Mutex<PageInner>,
}

impl<S: ProductStore + ?Sized> CatalogPage<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_query(store, QueryParams::default())
    }

    pub fn with_query(store: Arc<S>, query: QueryParams) -> Self {
        Self {
            store,
            inner: Mutex::new(PageInner {
                query,
                generation: 0,
                list: ListState::default(),
                delete: DeleteState::Idle,
                details: None,
            }),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub async fn query(&self) -> QueryParams {
        self.inner.lock().await.query.clone()
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        let inner = self.inner.lock().await;
        PageSnapshot {
            query: inner.query.clone(),
            list: inner.list.clone(),
            delete: inner.delete.clone(),
            details: inner.details.clone(),
        }
    }

    /// Fetch the list for the current query (initial load, manual refresh).
    pub async fn refresh(&self) -> FetchOutcome {
        let ticket = self.inner.lock().await.begin_fetch();
        self.run_fetch(ticket).await
    }

    /// Apply a query edit and fetch the matching list.
    pub async fn change_query(&self, change: QueryChange) -> FetchOutcome {
        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.query = inner.query.apply(change);
            inner.begin_fetch()
        };
        self.run_fetch(ticket).await
    }

    /// Form-style filter edit (`"isActive"`, `"true"`); invalid input fetches nothing.
    pub async fn set_filter_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<FetchOutcome, DomainError> {
        let change = QueryChange::from_field(field, value)?;
        Ok(self.change_query(change).await)
    }

    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        self.change_query(QueryChange::Page(page)).await
    }

    async fn run_fetch(&self, ticket: FetchTicket) -> FetchOutcome {
        tracing::debug!(
            op = "list",
            generation = ticket.generation,
            page = ticket.query.page(),
            "fetching products"
        );
        let result = self.store.list(&ticket.query).await;

        let mut inner = self.inner.lock().await;
        if ticket.generation != inner.generation {
            tracing::debug!(
                op = "list",
                generation = ticket.generation,
                latest = inner.generation,
                "discarding stale list response"
            );
            return FetchOutcome::Stale;
        }

        inner.list.loading = false;
        match result {
            Ok(list) => {
                inner.list.pagination = Pagination::new(
                    ticket.query.page(),
                    list.meta.total,
                    ticket.query.page_size(),
                );
                inner.list.products = list.products;
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(op = "list", generation = ticket.generation, error = %e, "failed to load products");
                inner.list.error = Some(messages::LOAD_PRODUCTS_FAILED.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Open the confirmation prompt for `id`. No store call is made.
    ///
    /// Returns `false` while another delete is in flight.
    pub async fn request_delete(&self, id: ProductId) -> bool {
        let mut inner = self.inner.lock().await;
        if matches!(inner.delete, DeleteState::Deleting(_)) {
            return false;
        }
        inner.delete = DeleteState::PendingConfirmation(id);
        true
    }

    /// Close the prompt without deleting anything.
    pub async fn cancel_delete(&self) {
        let mut inner = self.inner.lock().await;
        if inner.delete.is_prompt_open() {
            inner.delete = DeleteState::Idle;
        }
    }

    /// Delete the pending product, then refetch the current query once.
    pub async fn confirm_delete(&self) -> DeleteOutcome {
        let id = {
            let mut inner = self.inner.lock().await;
            let DeleteState::PendingConfirmation(id) = inner.delete.clone() else {
                return DeleteOutcome::NothingPending;
            };
            inner.delete = DeleteState::Deleting(id.clone());
            inner.list.error = None;
            id
        };

        match self.store.delete(&id).await {
            Ok(()) => {
                tracing::info!(op = "delete", product_id = %id, "product deleted");
                let ticket = {
                    let mut inner = self.inner.lock().await;
                    inner.delete = DeleteState::Idle;
                    inner.begin_fetch()
                };
                let refresh = self.run_fetch(ticket).await;
                DeleteOutcome::Deleted { id, refresh }
            }
            Err(error) => {
                tracing::warn!(op = "delete", product_id = %id, error = %error, "failed to delete product");
                let mut inner = self.inner.lock().await;
                inner.delete = DeleteState::Idle;
                inner.list.error = Some(messages::DELETE_FAILED.to_string());
                DeleteOutcome::Failed { id, error }
            }
        }
    }

    /// Whether the row for `id` should render its delete control as busy.
    ///
    /// True from `request_delete` until the prompt closes, which is on cancel
    /// or once the store call settles.
    pub async fn is_deleting(&self, id: &ProductId) -> bool {
        self.inner.lock().await.delete.target() == Some(id)
    }

    pub async fn show_details(&self, product: Product) {
        self.inner.lock().await.details = Some(product);
    }

    pub async fn close_details(&self) {
        self.inner.lock().await.details = None;
    }
}
