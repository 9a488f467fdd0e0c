//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same entity, even if their other
/// attributes differ (e.g. a customer before and after an address change).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every other attribute.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
