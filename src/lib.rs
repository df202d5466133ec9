//! Governance layer for AI-assisted code generation.
//!
//! This crate wraps an AI code-generation backend in repository policy:
//! project rules from `.sentinel/rules.yml` are injected as generation
//! context, a branch-protection gate blocks generation on protected
//! branches, and every generated snippet is followed by a security audit
//! pass. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rules parsing, the branch
//!   decision function). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (filesystem, git, environment).
//!   Isolated to enable mocking in tests.
//! - **[`provider`]**: The AI backend capability and its variants (offline
//!   mock, remote chat-completion endpoint).
//!
//! Orchestration modules ([`guard`], [`pipeline`]) coordinate core logic
//! with I/O to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod guard;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod provider;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
