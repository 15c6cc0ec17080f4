//! store-tasks - Task runner for the Store API service
//!
//! A single-shot command dispatcher for day-to-day work on the service:
//! starting the dev server, installing commit-time hooks, and running the
//! test suite. It also loads the service's typed settings from the
//! environment and an optional `.env` file.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and command dispatch
//! - [`core`] - Settings schema and loading
//! - [`engine`] - Execution context and exit-code mapping
//! - [`process`] - Abstraction over external tool invocations
//!
//! # Invariants
//!
//! 1. A `Settings` value always carries a database URL
//! 2. All external tools are reached through a `ProcessRunner`
//! 3. One invocation runs exactly one command, with no retries

pub mod cli;
pub mod core;
pub mod engine;
pub mod process;
