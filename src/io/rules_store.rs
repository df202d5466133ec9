//! Loads project rules from `.sentinel/rules.yml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::rules::{NO_RULES_SENTINEL, Rules, parse_rules};

/// File name of the rules document inside the sentinel directory.
pub const RULES_FILE: &str = "rules.yml";

/// Load rules from `<sentinel_dir>/rules.yml`.
///
/// A missing file is not an error: the returned rules carry the
/// [`NO_RULES_SENTINEL`] context text and a fully defaulted policy.
/// Malformed content degrades inside [`parse_rules`]. Only filesystem
/// failures (an existing file that cannot be read) propagate.
pub fn load_rules(sentinel_dir: &Path) -> Result<Rules> {
    let path = sentinel_dir.join(RULES_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no rules file, using defaults");
        return Ok(Rules {
            raw_text: NO_RULES_SENTINEL.to_string(),
            ..Rules::default()
        });
    }
    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    debug!(path = %path.display(), bytes = raw.len(), "loaded rules file");
    Ok(parse_rules(&raw))
}
