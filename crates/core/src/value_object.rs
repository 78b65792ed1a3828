//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two of them holding the same values are
//! the same value. In this workspace the CPF key, monetary amounts and
//! statement operations are value objects, while a customer is an entity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once constructed. Constructors that can
/// fail (e.g. a negative amount) validate up front, so every live instance
/// is a valid one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(i64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(100), Amount(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
