//! process
//!
//! Abstraction for synchronously running external tools.
//!
//! # Architecture
//!
//! Every external tool (poetry, uvicorn, pytest, pre-commit) is reached
//! through the [`ProcessRunner`] trait, which has two implementations:
//!
//! - [`SystemRunner`]: spawns real child processes (default)
//! - [`MockRunner`]: records invocations for tests
//!
//! Runs are blocking. There is no parallelism, timeout, or retry.

mod mock;
mod system;
mod traits;

pub use mock::MockRunner;
pub use system::SystemRunner;
pub use traits::{Invocation, ProcessError, ProcessRunner};
