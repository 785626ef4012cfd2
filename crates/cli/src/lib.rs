//! `stockroom` command-line front end.
//!
//! The view layer over the inventory store: parses commands, resolves
//! configuration, calls the store and renders products, events and errors.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::execute;
pub use config::Config;
