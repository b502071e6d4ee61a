//! `catalog-core`: identifiers, errors and modelling traits shared by the catalog crates.
//!
//! No IO here: everything is plain data and local checks.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
