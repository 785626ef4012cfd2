//! Identity that survives renames and quantity changes.

/// Something the store addresses by id rather than by value.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;
}
