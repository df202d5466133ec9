//! Git adapter for the branch gate.
//!
//! The gate needs exactly two operations from git: the current branch
//! name and the create-and-checkout side effect, so we keep a small,
//! explicit wrapper around `git` subprocess calls.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Return the current branch name, or `None` when the working
    /// directory is not inside a git repository (or git is unavailable).
    ///
    /// Detached HEAD reports the literal name `HEAD`.
    #[instrument(skip_all)]
    pub fn current_branch(&self) -> Result<Option<String>> {
        let output = match self.run(&["rev-parse", "--abbrev-ref", "HEAD"]) {
            Ok(output) => output,
            Err(_) => {
                debug!("git unavailable, treating as no repository");
                return Ok(None);
            }
        };
        if !output.status.success() {
            debug!("rev-parse failed, not a git repository");
            return Ok(None);
        }
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(branch = %name, "current branch");
        Ok(Some(name))
    }

    /// Create and check out a new branch at current HEAD.
    ///
    /// Git guarantees all-or-nothing here: on failure the previous branch
    /// stays checked out and the error carries git's own message.
    #[instrument(skip_all, fields(branch))]
    pub fn create_and_checkout(&self, branch: &str) -> Result<()> {
        debug!(branch, "creating and checking out new branch");
        self.run_checked(&["checkout", "-b", branch])?;
        Ok(())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}
