//! CLI tests for `sentinel create`.
//!
//! Spawns the sentinel binary and verifies exit codes and output for the
//! mock provider, the branch gate, and remote-provider misconfiguration.

use std::path::Path;
use std::process::{Command, Output};

use sentinel::exit_codes;
use sentinel::test_support::TestRepo;

fn run_create(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sentinel"))
        .current_dir(root)
        .arg("create")
        .args(args)
        // Host configuration must not leak into the scenarios.
        .env_remove("SENTINEL_GITHUB_TOKEN")
        .env_remove("SENTINEL_AI_PROVIDER")
        .env_remove("SENTINEL_AI_ENDPOINT")
        .env_remove("SENTINEL_AI_MODEL")
        .output()
        .expect("run sentinel create")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn mock_provider_without_rules_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_create(temp.path(), &["add login", "--provider", "mock"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK), "{}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("=== Generated Tests ==="));
    assert!(out.contains("add login"));
    assert!(out.contains("MOCK-001"));
    assert!(out.contains("MOCK-002"));
}

#[test]
fn protected_branch_without_type_blocks_before_generation() {
    let repo = TestRepo::new().expect("repo");
    repo.write_rules(
        "rules:\n  branch_check:\n    enabled: true\n    protected_branches: [main]\n    prefixes: [feature]\n",
    )
    .expect("rules");

    let output = run_create(repo.root(), &["add login", "-p", "mock"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("--branch-type"));
    // No provider call happened: no result sections were printed.
    assert!(!stdout(&output).contains("=== Generated"));
}

#[test]
fn protected_branch_with_valid_hints_creates_branch_and_generates() {
    let repo = TestRepo::new().expect("repo");
    repo.write_rules(
        "rules:\n  branch_check:\n    enabled: true\n    protected_branches: [main]\n    prefixes: [feature]\n",
    )
    .expect("rules");

    let output = run_create(
        repo.root(),
        &["add login", "-p", "mock", "-b", "feature", "-n", "x"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK), "{}", stderr(&output));
    assert!(stdout(&output).contains("MOCK-001"));

    let branch = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(repo.root())
        .output()
        .expect("git rev-parse");
    assert_eq!(String::from_utf8_lossy(&branch.stdout).trim(), "feature/x");
}

#[test]
fn unprotected_branch_needs_no_hints() {
    let repo = TestRepo::new().expect("repo");
    repo.write_rules("rules:\n  branch_check:\n    enabled: true\n    protected_branches: [main]\n")
        .expect("rules");

    let checkout = Command::new("git")
        .args(["checkout", "-b", "develop"])
        .current_dir(repo.root())
        .output()
        .expect("git checkout");
    assert!(checkout.status.success());

    let output = run_create(repo.root(), &["add login", "-p", "mock"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK), "{}", stderr(&output));
    assert!(stdout(&output).contains("MOCK-001"));
}

#[test]
fn remote_provider_without_token_fails_immediately() {
    let repo = TestRepo::new().expect("repo");

    let output = run_create(repo.root(), &["add login", "--provider", "copilot"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stderr(&output).contains("SENTINEL_GITHUB_TOKEN"));
    assert!(!stdout(&output).contains("=== Generated"));
}
