//! store-tasks binary entry point.

use std::process::ExitCode;

use store_tasks::cli::{self, Cli};
use store_tasks::engine;
use store_tasks::process::SystemRunner;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let mut stdout = std::io::stdout().lock();
    match cli::run(cli, &SystemRunner::new(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(engine::exit_code(&err))
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the `--debug` default.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "store_tasks=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
