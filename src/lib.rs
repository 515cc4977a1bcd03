//! # xst-cli - Table-Driven Project Scaffolding
//!
//! A small command-line dispatcher: subcommands live in a static registry
//! that maps each name to a handler function, and leftover arguments are
//! forwarded to the handler untouched.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install xst-cli
//! cargo install xst-cli
//!
//! # Scaffold a new project
//! xst-cli create my-project
//! ```

pub mod cli;
pub mod utils;

pub use cli::Output;

/// Result type alias for xst-cli operations
pub type Result<T> = anyhow::Result<T>;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
