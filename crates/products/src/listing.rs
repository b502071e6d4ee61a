use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::query::PageSize;

/// Pagination metadata returned with a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Response of `GET /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub meta: ListMeta,
}

/// Number of pages needed to show `total` products, `page_size` at a time.
pub fn total_pages(total: u64, page_size: PageSize) -> u32 {
    let pages = total.div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Derived pagination state for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn new(current_page: u32, total: u64, page_size: PageSize) -> Self {
        Self {
            current_page,
            total_pages: total_pages(total, page_size),
        }
    }

    /// Page numbers a selector should offer (`1..=total_pages`).
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total_pages
    }

    /// The selector is only shown when there is more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}
