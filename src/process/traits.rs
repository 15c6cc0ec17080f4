//! process::traits
//!
//! Process runner trait definition.
//!
//! # Design
//!
//! The `ProcessRunner` trait has a single capability: run an [`Invocation`]
//! to completion. Handlers build invocations and hand them to a runner, so
//! tests can substitute [`MockRunner`](super::MockRunner) and assert on the
//! argument lists without spawning anything.
//!
//! # Example
//!
//! ```
//! use store_tasks::process::{Invocation, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.run(&Invocation::new("poetry").args(["run", "pytest"])).unwrap();
//!
//! assert_eq!(runner.invocations()[0].argv(), vec!["poetry", "run", "pytest"]);
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from running an external process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    #[error("'{program}' exited with {}", describe_code(.code))]
    Failed { program: String, code: Option<i32> },
}

impl ProcessError {
    /// Exit code the task runner should finish with for this failure.
    ///
    /// Mirrors the child's code when it has one, otherwise 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessError::Failed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// A single external process invocation.
///
/// Built with a small builder so call sites read like the command line
/// they produce.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Program to execute, resolved through `PATH`.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory; inherits the parent's when `None`.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables set for the child only.
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Add an environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Trait for synchronously running external processes.
///
/// `run` blocks the calling thread until the child terminates. No timeout
/// or cancellation is applied.
pub trait ProcessRunner {
    /// Run the invocation to completion.
    ///
    /// Returns `Ok(())` only if the process exited successfully.
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;
}
