//! engine
//!
//! Execution context and outcome mapping.
//!
//! One invocation runs exactly one command: parse → route → execute → exit.
//! This module holds what is shared across that single pass: the
//! [`Context`] built from global flags, and the mapping from a failed run to
//! a process exit code.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::{env_file_path, ConfigError, Settings};
use crate::process::ProcessError;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Project directory; commands run and write files here.
    pub cwd: PathBuf,
    /// Variables settings are read from; the process environment when `None`.
    vars: Option<Vec<(OsString, OsString)>>,
}

impl Context {
    /// Context for a project directory, reading the process environment.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            vars: None,
        }
    }

    /// Build a context, defaulting the directory to the process cwd.
    pub fn resolve(cwd: Option<PathBuf>) -> Result<Self> {
        let cwd = match cwd {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        Ok(Self::new(cwd))
    }

    /// Read settings from `vars` instead of the process environment.
    pub fn with_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        self.vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Load settings for this project, overlaying `<cwd>/.env`.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let env_file = env_file_path(&self.cwd);
        match &self.vars {
            Some(vars) => Settings::from_sources(vars.iter().cloned(), Some(env_file.as_path())),
            None => Settings::load(Some(env_file.as_path())),
        }
    }
}

/// Exit code for a failed run.
///
/// A failed external tool propagates its own status. Everything else,
/// settings errors included, exits with 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(process_err) = err.downcast_ref::<ProcessError>() {
        return u8::try_from(process_err.exit_code()).unwrap_or(1);
    }
    1
}
