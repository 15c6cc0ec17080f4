//! run command - Start the dev server with live reload

use anyhow::Result;

use crate::core::config::Settings;
use crate::engine::Context;
use crate::process::{Invocation, ProcessRunner};

/// ASGI application the server loads.
pub const APP: &str = "store.main:app";

/// Loopback host the server binds to.
pub const HOST: &str = "127.0.0.1";

/// Port the server binds to.
pub const PORT: u16 = 8000;

/// Build the uvicorn invocation for the dev server.
///
/// Host and port are fixed; the validated settings are passed to the child
/// under their canonical keys.
pub fn invocation(ctx: &Context, settings: &Settings) -> Invocation {
    let port = PORT.to_string();
    let mut invocation = Invocation::new("poetry")
        .args(["run", "uvicorn", APP])
        .args(["--host", HOST, "--port", port.as_str(), "--reload"])
        .current_dir(&ctx.cwd);

    for (key, value) in settings.env_pairs() {
        invocation = invocation.env(key, value);
    }
    invocation
}

/// Run the dev server in the foreground.
///
/// Blocks until the server exits, normally on operator interrupt.
pub fn run(ctx: &Context, settings: &Settings, runner: &dyn ProcessRunner) -> Result<()> {
    tracing::info!(
        project = settings.project_name(),
        "starting dev server on http://{}:{}",
        HOST,
        PORT
    );
    runner.run(&invocation(ctx, settings))?;
    Ok(())
}
