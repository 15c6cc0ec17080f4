//! test and test-matching commands - Run the pytest suite

use std::io::Write;

use anyhow::Result;

use crate::engine::Context;
use crate::process::{Invocation, ProcessRunner};

/// Printed when `test-matching` is given no keyword.
pub const KEYWORD_HINT: &str = "Please provide a keyword for test-matching using the -k option.";

/// Directories pytest collects from for filtered runs.
pub const TEST_PATHS: [&str; 2] = ["store", "./tests/"];

/// Invocation for the full suite.
pub fn run_all_invocation(ctx: &Context) -> Invocation {
    Invocation::new("poetry")
        .args(["run", "pytest"])
        .current_dir(&ctx.cwd)
}

/// Invocation for a keyword-filtered run.
///
/// Output capture is disabled (`-s`), xfail reasons are reported (`-rx`)
/// and failures drop into the debugger (`--pdb`).
pub fn run_matching_invocation(ctx: &Context, keyword: &str) -> Invocation {
    Invocation::new("poetry")
        .args(["run", "pytest", "-s", "-rx", "-k", keyword, "--pdb"])
        .args(TEST_PATHS)
        .current_dir(&ctx.cwd)
}

/// Run the whole test suite.
pub fn run_all(ctx: &Context, runner: &dyn ProcessRunner) -> Result<()> {
    runner.run(&run_all_invocation(ctx))?;
    Ok(())
}

/// Run tests whose names match `keyword`.
///
/// An absent or empty keyword prints [`KEYWORD_HINT`] and succeeds without
/// running anything.
pub fn run_matching(
    ctx: &Context,
    runner: &dyn ProcessRunner,
    keyword: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let keyword = match keyword {
        Some(k) if !k.is_empty() => k,
        _ => {
            writeln!(out, "{}", KEYWORD_HINT)?;
            return Ok(());
        }
    };

    tracing::debug!(keyword, "running filtered tests");
    runner.run(&run_matching_invocation(ctx, keyword))?;
    Ok(())
}
