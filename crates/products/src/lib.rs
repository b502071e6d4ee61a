//! Products domain module (catalog read models, forms and list queries).
//!
//! This crate contains the catalog's business rules as deterministic domain
//! logic (no IO, no HTTP, no runtime).

pub mod category;
pub mod form;
pub mod listing;
pub mod price;
pub mod product;
pub mod query;

pub use category::ProductCategory;
pub use form::ProductForm;
pub use listing::{ListMeta, Pagination, ProductList, total_pages};
pub use price::Price;
pub use product::{NewProduct, Product, ProductPatch, RawProduct};
pub use query::{ActiveFilter, DEFAULT_PAGE_SIZE, PageSize, QueryChange, QueryParams};
