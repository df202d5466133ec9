//! Stable exit codes for sentinel CLI commands.

/// Command succeeded (including the advisory not-a-repository path).
pub const OK: i32 = 0;
/// Command failed: missing credentials, policy violation, branch creation
/// rejected, or a provider transport error.
pub const INVALID: i32 = 1;
