use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// A strictly positive unit price.
///
/// Stored as a `Decimal` so that wire strings such as `"19.99"` survive the
/// round trip exactly. Serialized as a JSON number, which is what the store
/// expects on create/update; it echoes the value back as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::invariant(format!(
                "price must be greater than zero (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl FromStr for Price {
    type Err = DomainError;

    /// Parse a user-typed price (`" 19.99 "`); non-numeric text is a validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = parse_decimal(s)?;
        Self::new(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Price::new(amount).map_err(serde::de::Error::custom)
    }
}

/// Parse a decimal amount as sent by the store or typed by a user.
pub fn parse_decimal(raw: &str) -> DomainResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("price is required"));
    }
    Decimal::from_str(trimmed)
        .map_err(|e| DomainError::validation(format!("invalid price {trimmed:?}: {e}")))
}
