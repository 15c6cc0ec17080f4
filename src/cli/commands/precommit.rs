//! precommit-install command - Write the pre-commit config and install hooks
//!
//! The config document is an external contract with the pre-commit tool and
//! is reproduced byte for byte, leading newline included.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::engine::Context;
use crate::process::{Invocation, ProcessRunner};

/// File the pre-commit tool reads its configuration from.
pub const CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// Pinned pre-commit configuration.
pub const PRECOMMIT_CONFIG: &str = r#"
default_language_version:
    python: python3.11
repos:
-   repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.4.0
    hooks:
    -   id: check-added-large-files
    -   id: check-toml
    -   id: check-yaml
        args:
        -   --unsafe
    -   id: end-of-file-fixer
    -   id: trailing-whitespace
-   repo: https://github.com/asottile/pyupgrade
    rev: v3.7.0
    hooks:
    -   id: pyupgrade
        args:
        - --py3-plus
        - --keep-runtime-typing
-   repo: https://github.com/charliermarsh/ruff-pre-commit
    rev: v0.0.275
    hooks:
    -   id: ruff
        args:
        - --fix
-   repo: https://github.com/psf/black
    rev: 23.3.0
    hooks:
    -   id: black
"#;

/// Invocation that installs the git hooks.
pub fn install_invocation(ctx: &Context) -> Invocation {
    Invocation::new("poetry")
        .args(["run", "pre-commit", "install"])
        .current_dir(&ctx.cwd)
}

/// Overwrite `<dir>/.pre-commit-config.yaml` with [`PRECOMMIT_CONFIG`].
///
/// The write goes through a temp file and a rename, so the config is never
/// observed half-written. Returns the path written.
pub fn write_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    let temp_path = path.with_extension("yaml.tmp");

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path.display()))?;

        file.write_all(PRECOMMIT_CONFIG.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        file.sync_all()
            .with_context(|| format!("Failed to sync {}", temp_path.display()))?;
    }

    fs::rename(&temp_path, &path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(path)
}

/// Write the config, then run `poetry run pre-commit install`.
pub fn install(ctx: &Context, runner: &dyn ProcessRunner) -> Result<()> {
    let path = write_config(&ctx.cwd)?;
    tracing::info!(path = %path.display(), "wrote pre-commit config");

    runner.run(&install_invocation(ctx))?;
    Ok(())
}
