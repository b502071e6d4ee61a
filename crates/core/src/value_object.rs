//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In the
/// catalog these are prices, categories and query parameters: two
/// `Price(19.99)` values are the same price wherever they came from.
///
/// To "modify" a value object, build a new one (see `QueryParams::apply`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
