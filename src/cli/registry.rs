//! Static command registry
//!
//! Dispatch is described by data: each entry binds a command name to its
//! alias, description, help examples, and handler function. The reserved
//! wildcard entry (`*`) is always present and catches unmatched input.

use anyhow::Result;

use super::Output;
use super::commands;

/// Handler invoked with the leftover argument tokens
pub type Handler = fn(&[String], &Output) -> Result<()>;

/// One registered command
pub struct CommandSpec {
    pub name: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub handler: Handler,
}

/// Reserved name of the fallback entry
pub const WILDCARD_NAME: &str = "*";

static REGISTRY: &[CommandSpec] = &[
    CommandSpec {
        name: "create",
        alias: "c",
        description: "create a project",
        examples: &["xst-cli create <project-name>"],
        handler: commands::create::execute,
    },
    CommandSpec {
        name: WILDCARD_NAME,
        alias: "",
        description: "command not found",
        examples: &[],
        handler: not_found,
    },
];

/// The full registry in insertion order, wildcard included
pub fn registry() -> &'static [CommandSpec] {
    REGISTRY
}

/// The registered commands, wildcard excluded
pub fn commands() -> impl Iterator<Item = &'static CommandSpec> {
    REGISTRY.iter().filter(|spec| spec.name != WILDCARD_NAME)
}

/// Look up a command by name or alias
pub fn resolve(token: &str) -> Option<&'static CommandSpec> {
    commands().find(|spec| spec.name == token || (!spec.alias.is_empty() && spec.alias == token))
}

/// The fallback entry. The registry invariant guarantees its presence.
pub fn wildcard() -> &'static CommandSpec {
    REGISTRY
        .iter()
        .find(|spec| spec.name == WILDCARD_NAME)
        .expect("registry always contains the wildcard entry")
}

/// Wildcard handler: print the static message, touch nothing else
fn not_found(_args: &[String], _output: &Output) -> Result<()> {
    println!("{}", wildcard().description);
    Ok(())
}
