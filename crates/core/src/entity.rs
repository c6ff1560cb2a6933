//! Entity trait: things with a stable identity whose state may change.

/// An entity is equal to itself across mutations (e.g. a book whose stock
/// goes down is still the same book, keyed by its ISBN).
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
