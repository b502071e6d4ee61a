//! List query parameters (filters + pagination).
//!
//! `QueryParams` is immutable: each user edit is a `QueryChange` applied to the
//! current parameters, producing the next set. Any filter edit moves the view
//! back to page 1; a page edit keeps the filters.

use core::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

use crate::category::ProductCategory;
use crate::product::Product;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Tri-state filter on the active flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveFilter {
    /// No filter; `isActive` is omitted from the request.
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ActiveFilter::All => None,
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => ActiveFilter::All,
            Some(true) => ActiveFilter::Active,
            Some(false) => ActiveFilter::Inactive,
        }
    }

    pub fn matches(&self, is_active: bool) -> bool {
        self.as_flag().is_none_or(|flag| flag == is_active)
    }
}

/// Number of products per page; never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    pub fn new(size: u32) -> DomainResult<Self> {
        NonZeroU32::new(size)
            .map(Self)
            .ok_or_else(|| DomainError::validation("page size must be at least 1"))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

impl ValueObject for PageSize {}

/// Active filter + pagination state of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    name: Option<String>,
    category: Option<ProductCategory>,
    active: ActiveFilter,
    #[serde(deserialize_with = "page_at_least_one")]
    page: u32,
    page_size: PageSize,
}

/// Pages are 1-based; a stored page 0 reads back as page 1.
fn page_at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            active: ActiveFilter::All,
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ValueObject for QueryParams {}

impl QueryParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<ProductCategory> {
        self.category
    }

    pub fn active(&self) -> ActiveFilter {
        self.active
    }

    /// 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Produce the parameters that follow `change`.
    pub fn apply(&self, change: QueryChange) -> QueryParams {
        let mut next = self.clone();
        let resets_page = change.is_filter();
        match change {
            QueryChange::Name(name) => next.name = name.filter(|n| !n.is_empty()),
            QueryChange::Category(category) => next.category = category,
            QueryChange::Active(active) => next.active = active,
            QueryChange::PageSize(size) => next.page_size = size,
            QueryChange::Page(page) => next.page = page.max(1),
        }
        if resets_page {
            next.page = 1;
        }
        next
    }

    /// Query-string pairs for `GET /products`; unset filters are omitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(flag) = self.active.as_flag() {
            pairs.push(("isActive", flag.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("perPage", self.page_size.get().to_string()));
        pairs
    }

    /// Whether `product` passes the filters (pagination is not considered).
    ///
    /// The name filter is a case-insensitive substring match.
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.as_ref().is_none_or(|needle| {
            product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = self.category.is_none_or(|c| c == product.category);
        name_ok && category_ok && self.active.matches(product.is_active)
    }
}

/// A single-field edit of the query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    Name(Option<String>),
    Category(Option<ProductCategory>),
    Active(ActiveFilter),
    PageSize(PageSize),
    Page(u32),
}

impl QueryChange {
    /// Name filter edit; the empty string means "no filter".
    pub fn name(value: impl Into<String>) -> Self {
        let value = value.into();
        QueryChange::Name(if value.is_empty() { None } else { Some(value) })
    }

    /// Parse a form-style field edit (`isActive` = `"true"`, `category` = `""`, ...).
    pub fn from_field(field: &str, value: &str) -> DomainResult<Self> {
        match field {
            "name" => Ok(Self::name(value)),
            "category" if value.is_empty() => Ok(QueryChange::Category(None)),
            "category" => Ok(QueryChange::Category(Some(value.parse()?))),
            "isActive" => match value {
                "" => Ok(QueryChange::Active(ActiveFilter::All)),
                "true" => Ok(QueryChange::Active(ActiveFilter::Active)),
                "false" => Ok(QueryChange::Active(ActiveFilter::Inactive)),
                other => Err(DomainError::validation(format!(
                    "isActive must be \"true\", \"false\" or empty (got {other:?})"
                ))),
            },
            "page" => value
                .parse::<u32>()
                .map(QueryChange::Page)
                .map_err(|e| DomainError::validation(format!("invalid page {value:?}: {e}"))),
            "perPage" => {
                let size = value.parse::<u32>().map_err(|e| {
                    DomainError::validation(format!("invalid perPage {value:?}: {e}"))
                })?;
                Ok(QueryChange::PageSize(PageSize::new(size)?))
            }
            other => Err(DomainError::validation(format!("unknown query field: {other}"))),
        }
    }

    /// Filter edits reset pagination; page edits do not.
    pub fn is_filter(&self) -> bool {
        !matches!(self, QueryChange::Page(_))
    }
}
