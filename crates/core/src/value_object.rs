//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// ## Construction is validation
///
/// A value object that wraps raw input (a string, a number) must check every
/// invariant in its constructor and expose no mutator afterwards. The rest of
/// the program can then accept the type instead of re-validating the raw form:
///
/// ```ignore
/// fn register(isbn: Isbn) { /* no need to re-check the checksum here */ }
/// ```
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied, never shared mutably
/// - **Eq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
/// - **Send + Sync**: with no mutator, sharing across threads is always sound
pub trait ValueObject: Clone + Eq + core::fmt::Debug + Send + Sync {}
