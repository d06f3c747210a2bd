//! Core Entity Trait
//!
//! Every record kept in the tracker is looked up by a stable identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id`, if present.
pub fn position_of<E: Entity>(entities: &[E], id: E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}
