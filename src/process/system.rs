//! process::system
//!
//! `ProcessRunner` backed by real child processes.

use std::process::Command;

use super::traits::{Invocation, ProcessError, ProcessRunner};

/// Runs invocations with [`std::process::Command`].
///
/// The child inherits stdin, stdout and stderr so interactive tools
/// (`pytest --pdb`, the reloading dev server) behave as if run directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }
        command.envs(invocation.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "spawning process");

        let status = command.status().map_err(|source| ProcessError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        tracing::debug!(command = %invocation, %status, "process exited");

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Failed {
                program: invocation.program.clone(),
                code: status.code(),
            })
        }
    }
}
