//! User-facing messages, one per failing operation.
//!
//! Store failures are never shown in detail; the presentation layer gets one
//! of these strings and the detail goes to the log.

pub const LOAD_PRODUCTS_FAILED: &str = "failed to load products";
pub const LOAD_PRODUCT_FAILED: &str = "failed to load product";
pub const CREATE_FAILED: &str = "failed to create product";
pub const UPDATE_FAILED: &str = "failed to update product";
pub const DELETE_FAILED: &str = "failed to delete product";
pub const INVALID_FORM: &str = "please fill in all fields correctly";
