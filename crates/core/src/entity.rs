//! Entity trait: things that keep their identity while their state changes.
//!
//! A customer is renamed and accumulates operations, yet stays the same
//! customer because its id never changes.

pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Two entities are the same one when their ids match, whatever their state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
