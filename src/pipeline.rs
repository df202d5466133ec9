//! The `create` pipeline: rules → branch gate → generate → audit.
//!
//! The order is fixed and strictly sequential. Provider resolution fails
//! fast (before rules or git are touched) so a misconfigured remote
//! backend never wastes a branch-creation side effect.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::guard::enforce_branch_policy;
use crate::io::git::Git;
use crate::io::init::SentinelPaths;
use crate::io::rules_store::load_rules;
use crate::io::settings::Settings;
use crate::provider::{AiProvider, resolve_provider};

/// Output of one `create` invocation, handed to the CLI for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub test_code: String,
    pub code: String,
    pub findings: Vec<String>,
}

/// Run the full `create` pipeline in `root`.
pub fn run_create(
    root: &Path,
    prompt: &str,
    provider_label: &str,
    settings: &Settings,
    branch_type: Option<&str>,
    branch_name: Option<&str>,
) -> Result<GenerationResult> {
    let provider = resolve_provider(provider_label, settings)?;

    let paths = SentinelPaths::new(root);
    let rules = load_rules(&paths.sentinel_dir)?;
    info!("rules loaded");

    let gate = enforce_branch_policy(
        &Git::new(root),
        &rules.branch_check,
        branch_type,
        branch_name,
    )?;
    debug!(?gate, "branch gate passed");

    generate_and_audit(provider.as_ref(), prompt, &rules.raw_text)
}

/// Drive the three provider calls in fixed order: tests first, then code,
/// then an audit of the code (never of the tests).
fn generate_and_audit(
    provider: &dyn AiProvider,
    prompt: &str,
    context: &str,
) -> Result<GenerationResult> {
    let test_code = provider
        .generate_code(&format!("Write tests for: {prompt}"), context)
        .context("generate tests")?;
    info!("tests generated");

    let code = provider
        .generate_code(prompt, context)
        .context("generate code")?;
    info!("code generated");

    let findings = provider.audit_security(&code).context("audit security")?;
    info!(findings = findings.len(), "security audit complete");

    Ok(GenerationResult {
        test_code,
        code,
        findings,
    })
}
