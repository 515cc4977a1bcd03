//! Command-line interface for xst-cli
//!
//! The CLI is table-driven: the static command registry supplies the clap
//! command tree, the help examples, and the handler dispatched for a
//! matched name. Unmatched input falls through to the wildcard entry.

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use tracing::debug;

mod commands;
mod output;
pub mod registry;

pub use output::Output;
pub use registry::CommandSpec;

use crate::utils;

/// Build the clap command tree from the command registry
pub fn build_command() -> Command {
    let mut cmd = Command::new(crate::PKG_NAME)
        .about(crate::PKG_DESCRIPTION)
        .disable_version_flag(true)
        .allow_external_subcommands(true)
        .after_help(example_section())
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print the package version"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Enable quiet output (minimal)"),
        );

    for spec in registry::commands() {
        let mut sub = Command::new(spec.name).about(spec.description).arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .help("Arguments forwarded to the command handler"),
        );
        if !spec.alias.is_empty() {
            sub = sub.alias(spec.alias);
        }
        cmd = cmd.subcommand(sub);
    }
    cmd
}

/// The `Example` section appended to `--help`: one line per registered
/// command that declares examples, in registry insertion order.
fn example_section() -> String {
    let mut section = String::from("Example");
    for spec in registry::registry() {
        for example in spec.examples {
            section.push('\n');
            section.push_str(example);
        }
    }
    section
}

/// Parse an explicit argument vector and dispatch to the matched handler.
///
/// `argv` is the full process argument vector including the program name;
/// tests pass synthetic vectors without spawning a process.
pub fn dispatch(argv: Vec<String>) -> Result<()> {
    let matches = build_command().get_matches_from(argv);
    let output = Output::new(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("version") {
        utils::log_package_version()?;
        return Ok(());
    }

    match matches.subcommand() {
        Some((name, sub)) => {
            let spec = registry::resolve(name).unwrap_or_else(registry::wildcard);
            let args = leftover_args(sub);
            debug!(command = spec.name, ?args, "dispatching");
            (spec.handler)(&args, &output)
        }
        None => {
            build_command().print_help()?;
            Ok(())
        }
    }
}

/// Collect the tokens left over after the command name.
///
/// Registered subcommands store them under the `args` id; external
/// (unmatched) subcommands store raw `OsString` values under the empty id.
fn leftover_args(sub: &ArgMatches) -> Vec<String> {
    if let Ok(Some(values)) = sub.try_get_many::<String>("args") {
        return values.cloned().collect();
    }
    match sub.try_get_many::<OsString>("") {
        Ok(Some(values)) => values
            .map(|v| v.to_string_lossy().into_owned())
            .collect(),
        _ => Vec::new(),
    }
}
