//! Entity trait: identity + continuity across the lifetime of an aggregate.

/// Entity marker + minimal interface.
///
/// Two entities with equal ids are the same entity, whatever their other
/// attributes hold. Ids are usually value objects (a registration number, an
/// ISBN) and are therefore already validated when the entity exists.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity, by identity only.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
