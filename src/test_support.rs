//! Test-only helpers for exercising the branch gate against real git.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

/// Scratch git repository on branch `main` with one commit.
pub struct TestRepo {
    temp: TempDir,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("tempdir")?;
        let root = temp.path();

        run_git(root, &["init", "--initial-branch=main"])?;
        run_git(root, &["config", "user.email", "test@example.com"])?;
        run_git(root, &["config", "user.name", "test"])?;
        run_git(root, &["config", "commit.gpgsign", "false"])?;

        fs::write(root.join("README.md"), "# test repo\n").context("write README")?;
        run_git(root, &["add", "-A"])?;
        run_git(root, &["commit", "-m", "initial commit"])?;

        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write `.sentinel/rules.yml` with the given document.
    pub fn write_rules(&self, raw: &str) -> Result<()> {
        let dir = self.root().join(".sentinel");
        fs::create_dir_all(&dir).context("create .sentinel")?;
        fs::write(dir.join("rules.yml"), raw).context("write rules.yml")?;
        Ok(())
    }
}

fn run_git(root: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .with_context(|| format!("spawn git {}", args.join(" ")))?;
    if !output.status.success() {
        return Err(anyhow!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    Ok(())
}
