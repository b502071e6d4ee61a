//! Create/edit form input and its local validation.
//!
//! Forms hold exactly what a user typed. Validation happens before any store
//! call: the name and description must be non-empty after trimming, the price
//! must parse to a decimal greater than zero and a category must be chosen.

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

use crate::category::ProductCategory;
use crate::price::Price;
use crate::product::{NewProduct, Product, ProductPatch};

/// Raw product form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Option<ProductCategory>,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: None,
            is_active: true,
        }
    }
}

impl ProductForm {
    /// Prefill an edit form from the stored product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.normalize().to_string(),
            category: Some(product.category),
            is_active: product.is_active,
        }
    }

    /// Set the category from a selector value; `""` clears it.
    pub fn set_category(&mut self, value: &str) -> DomainResult<()> {
        self.category = if value.is_empty() {
            None
        } else {
            Some(value.parse()?)
        };
        Ok(())
    }

    /// Validate for `POST /products`.
    ///
    /// The active flag is left to the store's default on creation.
    pub fn to_new_product(&self) -> DomainResult<NewProduct> {
        let fields = self.validated()?;
        Ok(NewProduct {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            is_active: None,
        })
    }

    /// Validate for `PATCH /products/{id}`; every field is sent.
    pub fn to_patch(&self) -> DomainResult<ProductPatch> {
        let fields = self.validated()?;
        Ok(ProductPatch {
            name: Some(fields.name),
            description: Some(fields.description),
            price: Some(fields.price),
            category: Some(fields.category),
            is_active: Some(self.is_active),
        })
    }

    fn validated(&self) -> DomainResult<ValidFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(DomainError::validation("description must not be empty"));
        }

        let price: Price = self.price.parse()?;

        let category = self
            .category
            .ok_or_else(|| DomainError::validation("category is required"))?;

        Ok(ValidFields {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
        })
    }
}

struct ValidFields {
    name: String,
    description: String,
    price: Price,
    category: ProductCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn filled() -> ProductForm {
        ProductForm {
            name: "  Notebook ".to_string(),
            description: " A5 dotted ".to_string(),
            price: "4.50".to_string(),
            category: Some(ProductCategory::Stationery),
            is_active: true,
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let body = filled().to_new_product().unwrap();
        assert_eq!(body.name, "Notebook");
        assert_eq!(body.description, "A5 dotted");
        assert_eq!(body.price.amount(), Decimal::new(450, 2));
        assert_eq!(body.is_active, None);
    }

    #[test]
    fn rejects_bad_prices() {
        for bad in ["0", "-5", "abc", "", "  "] {
            let form = ProductForm {
                price: bad.to_string(),
                ..filled()
            };
            assert!(form.to_new_product().is_err(), "price {bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_blank_text_fields_and_missing_category() {
        let blank_name = ProductForm {
            name: "   ".to_string(),
            ..filled()
        };
        assert!(blank_name.to_new_product().is_err());

        let blank_description = ProductForm {
            description: "\t".to_string(),
            ..filled()
        };
        assert!(blank_description.to_patch().is_err());

        let no_category = ProductForm {
            category: None,
            ..filled()
        };
        assert!(no_category.to_new_product().is_err());
    }

    #[test]
    fn patch_carries_every_field() {
        let mut form = filled();
        form.is_active = false;
        let patch = form.to_patch().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Notebook"));
        assert_eq!(patch.is_active, Some(false));
        assert_eq!(patch.category, Some(ProductCategory::Stationery));
    }

    #[test]
    fn set_category_clears_on_empty() {
        let mut form = filled();
        form.set_category("").unwrap();
        assert_eq!(form.category, None);
        form.set_category("TOYS").unwrap();
        assert_eq!(form.category, Some(ProductCategory::Toys));
        assert!(form.set_category("toys").is_err());
    }
}
