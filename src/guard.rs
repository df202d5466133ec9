//! Branch gate: applies the pure branch decision against a repository.
//!
//! Policy violations are hard failures that must stop the pipeline before
//! any AI call. The not-a-repository case is advisory only: branch policy
//! cannot apply there, so the run proceeds.

use anyhow::{Result, anyhow};
use tracing::{info, warn};

use crate::core::branch::{BranchDecision, evaluate};
use crate::core::rules::BranchCheck;
use crate::io::git::Git;

/// Terminal success states of the branch gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchGate {
    /// Policy disabled or not applicable (no repository).
    Skipped,
    /// Current branch is not protected.
    Passed,
    /// A compliant branch was created and checked out.
    Created(String),
}

/// Enforce branch policy for the working directory.
///
/// Performs the branch-creation side effect at most once, only when the
/// current branch is protected and both hints are valid. Every `Err` is
/// a policy violation or git failure and gates the whole pipeline.
pub fn enforce_branch_policy(
    git: &Git,
    check: &BranchCheck,
    branch_type: Option<&str>,
    branch_name: Option<&str>,
) -> Result<BranchGate> {
    // Only query git when the policy can apply.
    let current = if check.enabled {
        git.current_branch()?
    } else {
        None
    };
    match evaluate(check, current.as_deref(), branch_type, branch_name) {
        BranchDecision::Disabled => Ok(BranchGate::Skipped),
        BranchDecision::NotARepo => {
            warn!("not a git repository, skipping branch check");
            Ok(BranchGate::Skipped)
        }
        BranchDecision::Pass => Ok(BranchGate::Passed),
        BranchDecision::NeedsType { allowed } => Err(anyhow!(
            "branch '{}' is protected: pass --branch-type with one of [{}]",
            current.unwrap_or_default(),
            allowed.join(", ")
        )),
        BranchDecision::InvalidType { given, allowed } => Err(anyhow!(
            "branch type '{given}' is not allowed: expected one of [{}]",
            allowed.join(", ")
        )),
        BranchDecision::NeedsName { branch_type } => Err(anyhow!(
            "missing --branch-name: expected a branch like {branch_type}/<name>"
        )),
        BranchDecision::Create { branch } => {
            git.create_and_checkout(&branch)?;
            info!(branch = %branch, "created compliant branch");
            Ok(BranchGate::Created(branch))
        }
    }
}
