//! Inventory domain module.
//!
//! Business rules for a two-location stock tracker: products are created or
//! merged by case-insensitive name, quantities are adjusted or transferred
//! between the warehouse and the shop, and the whole list is persisted through
//! a single [`ProductSlot`].

pub mod code;
pub mod event;
pub mod product;
pub mod slot;
pub mod store;

pub use code::{CodeGenerator, RandomCodeGenerator, code_prefix};
pub use event::{
    InventoryEvent, ProductCreated, ProductEdited, ProductRemoved, QuantityAdjusted, StockAdded,
    StockTransferred,
};
pub use product::{Location, Product, ProductCode, parse_delta, parse_quantity, parse_stock_level};
pub use slot::{InMemorySlot, ProductSlot};
pub use store::{InventoryStore, Mutation, ProductEdit, UpsertKind, UpsertOutcome, filter_by_name};
