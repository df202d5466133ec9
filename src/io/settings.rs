//! Environment-derived configuration.
//!
//! Settings are read once at process start and passed by reference into
//! provider resolution, never held as ambient global state. Sources in
//! increasing precedence: built-in defaults, a `.env` dotfile in the
//! working directory, `SENTINEL_*` process environment variables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

const KEY_GITHUB_TOKEN: &str = "SENTINEL_GITHUB_TOKEN";
const KEY_AI_PROVIDER: &str = "SENTINEL_AI_PROVIDER";
const KEY_AI_ENDPOINT: &str = "SENTINEL_AI_ENDPOINT";
const KEY_AI_MODEL: &str = "SENTINEL_AI_MODEL";

const ALL_KEYS: [&str; 4] = [
    KEY_GITHUB_TOKEN,
    KEY_AI_PROVIDER,
    KEY_AI_ENDPOINT,
    KEY_AI_MODEL,
];

/// Immutable process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential for the remote provider. Empty when unset; only an
    /// error once a remote provider is actually selected.
    pub github_token: String,
    /// Default provider label for `create` when `--provider` is omitted.
    pub ai_provider: String,
    /// Base URL of the OpenAI-compatible chat endpoint.
    pub ai_endpoint: String,
    /// Model identifier sent with every remote request.
    pub ai_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_token: String::new(),
            ai_provider: "mock".to_string(),
            ai_endpoint: "https://models.inference.ai.azure.com".to_string(),
            ai_model: "gpt-4o".to_string(),
        }
    }
}

impl Settings {
    /// Load settings for a working directory (`<root>/.env` + process env).
    pub fn load(root: &Path) -> Self {
        let mut values = HashMap::new();
        let dotfile = root.join(".env");
        if let Ok(contents) = fs::read_to_string(&dotfile) {
            debug!(path = %dotfile.display(), "loaded dotfile");
            values = parse_dotenv(&contents);
        }
        for key in ALL_KEYS {
            if let Ok(value) = std::env::var(key) {
                values.insert(key.to_string(), value);
            }
        }
        Self::from_values(&values)
    }

    /// Build settings from an already-merged key/value map.
    fn from_values(values: &HashMap<String, String>) -> Self {
        let mut settings = Self::default();
        let mut take = |key: &str, slot: &mut String| {
            if let Some(value) = values.get(key) {
                *slot = value.clone();
            }
        };
        take(KEY_GITHUB_TOKEN, &mut settings.github_token);
        take(KEY_AI_PROVIDER, &mut settings.ai_provider);
        take(KEY_AI_ENDPOINT, &mut settings.ai_endpoint);
        take(KEY_AI_MODEL, &mut settings.ai_model);
        settings
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments and
/// stripping simple surrounding quotes.
fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().to_string();
        if key.is_empty() {
            continue;
        }
        let mut value = value.trim().to_string();
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = value[1..value.len() - 1].to_string();
        }
        out.insert(key, value);
    }
    out
}
