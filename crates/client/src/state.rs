//! View state exposed to the presentation layer.
//!
//! These are plain snapshots: the presentation layer renders them and sends
//! intents back through `CatalogPage`; it never mutates them in place.

use serde::Serialize;

use catalog_core::ProductId;
use catalog_products::{Pagination, Product, QueryParams};

/// The product list as last successfully fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListState {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    /// A fetch for the current query is outstanding.
    pub loading: bool,
    /// User-facing message of the last failed operation, if any.
    pub error: Option<String>,
}

impl ListState {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Delete confirmation flow.
///
/// `Idle → PendingConfirmation → Idle` on cancel;
/// `PendingConfirmation → Deleting → Idle` once the store call settles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "product_id", rename_all = "snake_case")]
pub enum DeleteState {
    #[default]
    Idle,
    PendingConfirmation(ProductId),
    Deleting(ProductId),
}

impl DeleteState {
    /// Product the flow is about, if any.
    pub fn target(&self) -> Option<&ProductId> {
        match self {
            DeleteState::Idle => None,
            DeleteState::PendingConfirmation(id) | DeleteState::Deleting(id) => Some(id),
        }
    }

    /// Whether the confirmation prompt is open.
    pub fn is_prompt_open(&self) -> bool {
        matches!(self, DeleteState::PendingConfirmation(_))
    }
}

/// Everything a page render needs, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub query: QueryParams,
    pub list: ListState,
    pub delete: DeleteState,
    /// Product shown in the details panel.
    pub details: Option<Product>,
}
