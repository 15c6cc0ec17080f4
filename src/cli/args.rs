//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The command name is taken as a free-form positional and resolved into a
//! [`Command`] afterwards, so an unknown name can be reported as a soft
//! message instead of a usage error.

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

/// Task runner for the Store API service
#[derive(Parser, Debug)]
#[command(name = "store-tasks")]
#[command(author, version, about = "Manage project tasks.", long_about = None)]
pub struct Cli {
    /// Command to run (run, precommit-install, test, test-matching)
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Keyword for test-matching
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Run as if store-tasks was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Resolve the positional name into a [`Command`].
    ///
    /// Returns `None` for an unknown name.
    pub fn resolve(&self) -> Option<Command> {
        Command::from_name(&self.command, &self.keyword)
    }
}

/// Available commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the dev server
    Run,
    /// Write the pre-commit config and install hooks
    PrecommitInstall,
    /// Run the full test suite
    Test,
    /// Run tests matching a keyword
    TestMatching { keyword: Option<String> },
}

impl Command {
    /// Build a command from its name and the `-k` value.
    ///
    /// The keyword is only kept for `test-matching`; an empty keyword
    /// becomes `None`.
    pub fn from_name(name: &str, keyword: &str) -> Option<Self> {
        match name {
            "run" => Some(Command::Run),
            "precommit-install" => Some(Command::PrecommitInstall),
            "test" => Some(Command::Test),
            "test-matching" => Some(Command::TestMatching {
                keyword: Some(keyword.to_string()).filter(|k| !k.is_empty()),
            }),
            _ => None,
        }
    }

    /// Name the command is invoked by.
    fn name(&self) -> &'static str {
        match self {
            Command::Run => "run",
            Command::PrecommitInstall => "precommit-install",
            Command::Test => "test",
            Command::TestMatching { .. } => "test-matching",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
