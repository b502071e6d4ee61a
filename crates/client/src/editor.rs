//! Create and edit submissions.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::{DomainError, ProductId};
use catalog_products::{Product, ProductForm};

use crate::messages;
use crate::store::{ProductStore, StoreError};

/// Why a form submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected locally; the store was not called.
    #[error("invalid form: {0}")]
    Invalid(#[from] DomainError),
    #[error("create failed: {0}")]
    Create(#[source] StoreError),
    #[error("update failed: {0}")]
    Update(#[source] StoreError),
    #[error("load failed: {0}")]
    Load(#[source] StoreError),
}

impl SubmitError {
    /// The single message shown above the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Invalid(_) => messages::INVALID_FORM,
            SubmitError::Create(_) => messages::CREATE_FAILED,
            SubmitError::Update(_) => messages::UPDATE_FAILED,
            SubmitError::Load(_) => messages::LOAD_PRODUCT_FAILED,
        }
    }
}

/// Validates product forms and submits them to the store.
///
/// On success the stored product is returned and the caller navigates back to
/// the list, whose next fetch picks the change up.
pub struct ProductEditor<S: ProductStore + ?Sized> {
    store: Arc<S>,
}

impl<S: ProductStore + ?Sized> ProductEditor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn create(&self, form: &ProductForm) -> Result<Product, SubmitError> {
        let body = form.to_new_product()?;
        let created = self.store.create(&body).await.map_err(|e| {
            tracing::warn!(op = "create", error = %e, "failed to create product");
            SubmitError::Create(e)
        })?;
        tracing::info!(op = "create", product_id = %created.id, "product created");
        Ok(created)
    }

    /// Fetch a product and prefill the edit form with it.
    pub async fn load_for_edit(&self, id: &ProductId) -> Result<ProductForm, SubmitError> {
        let product = self.store.get(id).await.map_err(|e| {
            tracing::warn!(op = "get", product_id = %id, error = %e, "failed to load product");
            SubmitError::Load(e)
        })?;
        Ok(ProductForm::from_product(&product))
    }

    pub async fn update(&self, id: &ProductId, form: &ProductForm) -> Result<Product, SubmitError> {
        let patch = form.to_patch()?;
        let updated = self.store.update(id, &patch).await.map_err(|e| {
            tracing::warn!(op = "update", product_id = %id, error = %e, "failed to update product");
            SubmitError::Update(e)
        })?;
        tracing::info!(op = "update", product_id = %updated.id, "product updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryProductStore;
    use catalog_products::ProductCategory;

    fn form(price: &str) -> ProductForm {
        ProductForm {
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: price.to_string(),
            category: Some(ProductCategory::Household),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn create_then_edit_round_trip() {
        let store = Arc::new(InMemoryProductStore::new());
        let editor = ProductEditor::new(store.clone());

        let created = editor.create(&form("19.99")).await.unwrap();
        let mut edit = editor.load_for_edit(&created.id).await.unwrap();
        assert_eq!(edit.price, "19.99");

        edit.is_active = false;
        edit.name = " Floor lamp ".to_string();
        let updated = editor.update(&created.id, &edit).await.unwrap();
        assert_eq!(updated.name, "Floor lamp");
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn messages_distinguish_operations() {
        let store = Arc::new(InMemoryProductStore::new());
        let editor = ProductEditor::new(store);
        let missing = ProductId::new("missing");

        let err = editor.update(&missing, &form("1")).await.unwrap_err();
        assert_eq!(err.user_message(), messages::UPDATE_FAILED);

        let err = editor.load_for_edit(&missing).await.unwrap_err();
        assert_eq!(err.user_message(), messages::LOAD_PRODUCT_FAILED);

        let err = editor.create(&form("0")).await.unwrap_err();
        assert_eq!(err.user_message(), messages::INVALID_FORM);
    }
}
