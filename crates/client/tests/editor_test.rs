mod common;

use std::sync::Arc;

use catalog_client::{ProductEditor, SubmitError, messages};
use catalog_products::{ProductCategory, ProductForm};

use common::{ScriptedStore, product};

fn form(name: &str, description: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        category: Some(ProductCategory::Beverage),
        is_active: true,
    }
}

#[tokio::test]
async fn invalid_forms_make_no_store_calls() {
    let store = Arc::new(ScriptedStore::with_products([product("p-1", "Tea")]));
    let editor = ProductEditor::new(store.clone());

    let cases = [
        form("Tea", "Green tea", "0"),
        form("Tea", "Green tea", "-5"),
        form("Tea", "Green tea", "abc"),
        form("Tea", "Green tea", ""),
        form("   ", "Green tea", "3.50"),
        form("Tea", "  ", "3.50"),
        ProductForm {
            category: None,
            ..form("Tea", "Green tea", "3.50")
        },
    ];

    for case in &cases {
        let err = editor.create(case).await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)), "{case:?}");
        assert_eq!(err.user_message(), messages::INVALID_FORM);

        let err = editor
            .update(&"p-1".parse().unwrap(), case)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), messages::INVALID_FORM);
    }

    assert_eq!(store.total_calls(), 0);
}

#[tokio::test]
async fn valid_create_is_sent_once_and_trimmed() {
    let store = Arc::new(ScriptedStore::default());
    let editor = ProductEditor::new(store.clone());

    let created = editor
        .create(&form("  Oolong ", " Roasted ", "12.5"))
        .await
        .unwrap();

    assert_eq!(created.name, "Oolong");
    assert_eq!(created.description, "Roasted");
    assert_eq!(created.display_price(), "12.50");
    assert!(created.is_active);
    assert_eq!(store.total_calls(), 1);
}

#[tokio::test]
async fn editing_sends_every_field() {
    let store = Arc::new(ScriptedStore::with_products([product("p-1", "Tea")]));
    let editor = ProductEditor::new(store.clone());
    let id = "p-1".parse().unwrap();

    let mut edit = editor.load_for_edit(&id).await.unwrap();
    assert_eq!(edit.name, "Tea");
    edit.price = "4.25".to_string();
    edit.category = Some(ProductCategory::Toys);

    let updated = editor.update(&id, &edit).await.unwrap();
    assert_eq!(updated.category, ProductCategory::Toys);
    assert_eq!(updated.display_price(), "4.25");
    assert_eq!(updated.description, "Tea description");
}
