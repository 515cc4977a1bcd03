//! Command implementations for the xst-cli registry
//!
//! Each registered command lives in its own module and exposes an
//! `execute(args, output)` handler referenced from the registry table.

pub mod create;
