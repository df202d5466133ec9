//! Branch-protection decision function.
//!
//! The decision is pure: it looks at the policy, the current branch, and
//! the caller's `type`/`name` hints and returns what should happen. The
//! git side effect (creating the escape-hatch branch) lives in
//! [`crate::guard`] so this logic stays unit-testable without a repository.

use crate::core::rules::BranchCheck;

/// Outcome of evaluating branch policy against the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchDecision {
    /// Policy disabled; nothing to check.
    Disabled,
    /// Working directory is not a git repository; policy cannot apply.
    NotARepo,
    /// Current branch is not protected.
    Pass,
    /// Protected branch and no `--branch-type` hint was given.
    NeedsType { allowed: Vec<String> },
    /// Protected branch and the given type is not an allowed prefix.
    InvalidType { given: String, allowed: Vec<String> },
    /// Valid type but no `--branch-name` hint was given.
    NeedsName { branch_type: String },
    /// Both hints valid: create and check out `branch`.
    Create { branch: String },
}

/// Decide what the branch gate should do.
pub fn evaluate(
    check: &BranchCheck,
    current_branch: Option<&str>,
    branch_type: Option<&str>,
    branch_name: Option<&str>,
) -> BranchDecision {
    if !check.enabled {
        return BranchDecision::Disabled;
    }
    let Some(current) = current_branch else {
        return BranchDecision::NotARepo;
    };
    if !check.protected_branches.iter().any(|b| b == current) {
        return BranchDecision::Pass;
    }

    let Some(branch_type) = branch_type else {
        return BranchDecision::NeedsType {
            allowed: check.prefixes.clone(),
        };
    };
    if !check.prefixes.iter().any(|p| p == branch_type) {
        return BranchDecision::InvalidType {
            given: branch_type.to_string(),
            allowed: check.prefixes.clone(),
        };
    }
    let Some(branch_name) = branch_name else {
        return BranchDecision::NeedsName {
            branch_type: branch_type.to_string(),
        };
    };
    BranchDecision::Create {
        branch: format!("{branch_type}/{branch_name}"),
    }
}
