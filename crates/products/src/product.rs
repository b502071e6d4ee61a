use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, Entity, ProductId};

use crate::category::ProductCategory;
use crate::price::{Price, parse_decimal};

/// Catalog product as held by the client.
///
/// This is a read model: the store creates, mutates and destroys products;
/// the client only keeps the latest copy it was sent. On the wire the price
/// is a decimal string; in memory it is a `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct", into = "RawProduct")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: ProductCategory,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Product {
    /// Price formatted for display with two decimals (`"19.90"`).
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product exactly as the store serializes it (price as a decimal string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: ProductCategory,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<RawProduct> for Product {
    type Error = DomainError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let price = parse_decimal(&raw.price)?;
        Ok(Self {
            id: ProductId::new(raw.id),
            name: raw.name,
            description: raw.description,
            price,
            category: raw.category,
            is_active: raw.is_active,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}

impl From<Product> for RawProduct {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into_inner(),
            name: p.name,
            description: p.description,
            price: p.price.normalize().to_string(),
            category: p.category,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: ProductCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body of `PATCH /products/{id}`: any subset of the creation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
    }

    /// Apply the patch to a product in place (used by in-process stores).
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price.amount();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_product() -> serde_json::Value {
        json!({
            "id": "p-1",
            "name": "Coffee",
            "description": "Ground coffee 500g",
            "price": "19.99",
            "category": "BEVERAGE",
            "isActive": true,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z"
        })
    }

    #[test]
    fn wire_price_string_becomes_decimal() {
        let product: Product = serde_json::from_value(wire_product()).unwrap();
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.id, ProductId::new("p-1"));
        assert_eq!(product.category, ProductCategory::Beverage);
        assert!(product.is_active);
        assert_eq!(product.display_price(), "19.99");
    }

    #[test]
    fn malformed_wire_price_is_an_error() {
        let mut value = wire_product();
        value["price"] = json!("nineteen");
        assert!(serde_json::from_value::<Product>(value).is_err());
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let product: Product = serde_json::from_value(wire_product()).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value, wire_product());
    }

    #[test]
    fn new_product_sends_numeric_price_and_omits_unset_flag() {
        let body = NewProduct {
            name: "Coffee".to_string(),
            description: "Ground coffee".to_string(),
            price: "19.99".parse().unwrap(),
            category: ProductCategory::Beverage,
            is_active: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Coffee",
                "description": "Ground coffee",
                "price": 19.99,
                "category": "BEVERAGE"
            })
        );
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = ProductPatch {
            is_active: Some(false),
            ..ProductPatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "isActive": false }));
        assert!(ProductPatch::default().is_empty());
    }

    #[test]
    fn patch_applies_present_fields_only() {
        let mut product: Product = serde_json::from_value(wire_product()).unwrap();
        let patch = ProductPatch {
            price: Some("5.50".parse().unwrap()),
            is_active: Some(false),
            ..ProductPatch::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.price, Decimal::new(550, 2));
        assert!(!product.is_active);
        assert_eq!(product.name, "Coffee");
    }
}
