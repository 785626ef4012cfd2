//! Durable `ProductSlot` implementations.

mod json_file;

pub use json_file::JsonFileSlot;
