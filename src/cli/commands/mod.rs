//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler builds its [`Invocation`](crate::process::Invocation)s and
//! hands them to the injected [`ProcessRunner`]. Handlers never spawn
//! processes themselves, so every command can be exercised with a
//! [`MockRunner`](crate::process::MockRunner).
//!
//! Only `run` needs settings. They are loaded here, before the server is
//! started, so a configuration error aborts the command before anything is
//! spawned.

pub mod precommit;
pub mod server;
pub mod test_cmd;

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::engine::Context;
use crate::process::ProcessRunner;

/// Dispatch a command to its handler.
pub fn dispatch(
    command: Command,
    ctx: &Context,
    runner: &dyn ProcessRunner,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::debug!(command = %command, cwd = %ctx.cwd.display(), "dispatching");

    match command {
        Command::Run => {
            let settings = ctx.load_settings().context("Failed to load settings")?;
            server::run(ctx, &settings, runner)
        }
        Command::PrecommitInstall => precommit::install(ctx, runner),
        Command::Test => test_cmd::run_all(ctx, runner),
        Command::TestMatching { keyword } => {
            test_cmd::run_matching(ctx, runner, keyword.as_deref(), out)
        }
    }
}
