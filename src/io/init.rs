//! Initialization helpers for `.sentinel/` scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::rules_store::RULES_FILE;

/// Canonical paths within `.sentinel/` for a project root.
#[derive(Debug, Clone)]
pub struct SentinelPaths {
    pub root: PathBuf,
    pub sentinel_dir: PathBuf,
    pub rules_path: PathBuf,
}

impl SentinelPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let sentinel_dir = root.join(".sentinel");
        Self {
            root: root.clone(),
            rules_path: sentinel_dir.join(RULES_FILE),
            sentinel_dir,
        }
    }
}

/// Outcome of `sentinel init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// `.sentinel/rules.yml` was created with the example policy.
    Created,
    /// `.sentinel/` already exists; nothing was touched.
    AlreadyExists,
}

/// Example policy written by `sentinel init`. Branch protection starts
/// enabled so the gate is exercised from day one.
pub const EXAMPLE_RULES: &str = "\
# Sentinel Rules
rules:
  tdd: true
  owasp: true
  atomic_design: true
  documentation: auto
  branch_check:
    enabled: true
    protected_branches: [main, master]
    prefixes: [feature, bugfix, refactor, hotfix]
";

/// Create `.sentinel/` scaffolding in `root`.
///
/// An existing `.sentinel/` directory is left untouched and reported via
/// [`InitOutcome::AlreadyExists`]; that is a warning, not an error.
pub fn init_sentinel(root: &Path) -> Result<InitOutcome> {
    let paths = SentinelPaths::new(root);
    if paths.sentinel_dir.exists() {
        return Ok(InitOutcome::AlreadyExists);
    }
    fs::create_dir_all(&paths.sentinel_dir)
        .with_context(|| format!("create directory {}", paths.sentinel_dir.display()))?;
    fs::write(&paths.rules_path, EXAMPLE_RULES)
        .with_context(|| format!("write {}", paths.rules_path.display()))?;
    Ok(InitOutcome::Created)
}
