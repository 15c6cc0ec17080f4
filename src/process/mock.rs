//! process::mock
//!
//! Mock process runner for deterministic testing.
//!
//! # Design
//!
//! `MockRunner` records every invocation it receives instead of spawning a
//! process. A failure can be scripted for invocations whose argument vector
//! contains a given token, which exercises the error paths of handlers.
//!
//! # Example
//!
//! ```
//! use store_tasks::process::{Invocation, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new().fail_with_code("pre-commit", 1);
//!
//! assert!(runner.run(&Invocation::new("poetry").args(["run", "pytest"])).is_ok());
//! assert!(runner.run(&Invocation::new("poetry").args(["run", "pre-commit"])).is_err());
//! assert_eq!(runner.invocations().len(), 2);
//! ```

use std::sync::{Arc, Mutex};

use super::traits::{Invocation, ProcessError, ProcessRunner};

/// Mock runner for testing.
///
/// Clones share the same recorded state.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug, Default)]
struct MockRunnerInner {
    /// Recorded invocations, in call order.
    invocations: Vec<Invocation>,
    /// Token and exit code for a scripted failure.
    fail_on: Option<(String, i32)>,
}

impl MockRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make invocations containing `token` in their argv exit with `code`.
    pub fn fail_with_code(self, token: impl Into<String>, code: i32) -> Self {
        self.lock().fail_on = Some((token.into(), code));
        self
    }

    /// All invocations received so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().invocations.clone()
    }

    /// Number of invocations received so far.
    pub fn call_count(&self) -> usize {
        self.lock().invocations.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockRunnerInner> {
        // A poisoned lock only happens after a panicking test; keep the data.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        let mut inner = self.lock();
        inner.invocations.push(invocation.clone());

        match &inner.fail_on {
            Some((token, code)) if invocation.argv().contains(&token.as_str()) => {
                Err(ProcessError::Failed {
                    program: invocation.program.clone(),
                    code: Some(*code),
                })
            }
            _ => Ok(()),
        }
    }
}
