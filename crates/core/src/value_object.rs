//! Value object trait: equality by value, not identity.
//!
//! Wheels, engines, trailers, refrigeration units and registration authorities
//! have **no identity**: two wheels of the same brand and tread are the same wheel
//! as far as the model is concerned.

/// Marker trait for value objects.
///
/// Value objects are **immutable** once built and **compared by value**. To
/// "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Trailer {
///     length_m: f64,
/// }
///
/// impl ValueObject for Trailer {}
///
/// assert_eq!(Trailer { length_m: 12.0 }, Trailer { length_m: 12.0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
