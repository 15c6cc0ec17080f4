//! cli
//!
//! Command-line interface layer for store-tasks.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Report unknown command names
//! - Delegate to command handlers
//!
//! # Exit Behaviour
//!
//! Unknown command names and a missing `-k` for `test-matching` are soft
//! errors: a message is printed to stdout and the run succeeds. Failures of
//! external tools and settings errors are returned to `main`.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use std::ffi::OsString;
use std::io::Write;

use anyhow::Result;

use crate::engine::Context;
use crate::process::ProcessRunner;

/// Run an already-parsed command line.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli, runner: &dyn ProcessRunner, out: &mut dyn Write) -> Result<()> {
    match cli.resolve() {
        Some(command) => {
            let ctx = Context::resolve(cli.cwd)?;
            commands::dispatch(command, &ctx, runner, out)
        }
        None => {
            tracing::debug!(name = %cli.command, "unknown command");
            writeln!(out, "Unknown command: {}", cli.command)?;
            Ok(())
        }
    }
}

/// Parse `args` (program name first) and run the result.
///
/// Usage errors come back as [`clap::Error`] inside the returned error.
pub fn run_with<I, T>(args: I, runner: &dyn ProcessRunner, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = <Cli as clap::Parser>::try_parse_from(args)?;
    run(cli, runner, out)
}
