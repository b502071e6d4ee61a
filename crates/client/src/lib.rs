//! `catalog-client`
//!
//! **Responsibility:** client-side state for the product catalog.
//!
//! This crate provides:
//! - The `ProductStore` boundary to the remote product API (HTTP and in-memory)
//! - `CatalogPage`: query state, last-request-wins list fetching, delete flow
//! - `ProductEditor`: create/edit form submission with local validation
//!
//! The store remains the authority: every mutation is followed by a refetch,
//! never by a local patch of the list.

pub mod config;
pub mod editor;
pub mod http;
pub mod memory;
pub mod messages;
pub mod page;
pub mod state;
pub mod store;

pub use config::{ClientConfig, ConfigError};
pub use editor::{ProductEditor, SubmitError};
pub use http::HttpProductStore;
pub use memory::InMemoryProductStore;
pub use page::{CatalogPage, DeleteOutcome, FetchOutcome};
pub use state::{DeleteState, ListState, PageSnapshot};
pub use store::{ProductStore, StoreError};
