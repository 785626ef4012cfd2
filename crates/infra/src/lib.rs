//! Infrastructure adapters for the inventory domain.

pub mod storage;

pub use storage::JsonFileSlot;
