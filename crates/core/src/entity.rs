//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Records read from a backend (accounts, computers, transactions) are entities:
/// two records with the same id describe the same thing, whatever their fields.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
