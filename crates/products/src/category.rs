use core::str::FromStr;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ValueObject};

/// Closed set of catalog categories.
///
/// The wire spelling is the SCREAMING_SNAKE_CASE variant name (`PERSONAL_CARE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Grocery,
    Beverage,
    PersonalCare,
    Household,
    Electronics,
    Clothing,
    Toys,
    Stationery,
    Other,
}

impl ProductCategory {
    /// Every category, in the order selectors list them.
    pub const ALL: [ProductCategory; 9] = [
        ProductCategory::Grocery,
        ProductCategory::Beverage,
        ProductCategory::PersonalCare,
        ProductCategory::Household,
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::Toys,
        ProductCategory::Stationery,
        ProductCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Grocery => "GROCERY",
            ProductCategory::Beverage => "BEVERAGE",
            ProductCategory::PersonalCare => "PERSONAL_CARE",
            ProductCategory::Household => "HOUSEHOLD",
            ProductCategory::Electronics => "ELECTRONICS",
            ProductCategory::Clothing => "CLOTHING",
            ProductCategory::Toys => "TOYS",
            ProductCategory::Stationery => "STATIONERY",
            ProductCategory::Other => "OTHER",
        }
    }
}

impl ValueObject for ProductCategory {}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown product category: {s:?}")))
    }
}
