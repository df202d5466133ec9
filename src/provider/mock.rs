//! Deterministic offline provider.

use anyhow::Result;

use super::AiProvider;

/// Provider that returns fixed responses. Useful without an API key and
/// as the scripted backend in tests: `generate_code` always embeds the
/// prompt verbatim so callers can assert on it.
pub struct MockProvider;

impl AiProvider for MockProvider {
    fn generate_code(&self, prompt: &str, _context: &str) -> Result<String> {
        Ok(format!(
            "# Auto-generated mock code\n\
             # Prompt: {prompt}\n\
             def hello():\n    \
             return \"Hello from sentinel mock provider!\"\n"
        ))
    }

    fn audit_security(&self, _code: &str) -> Result<Vec<String>> {
        Ok(vec![
            "MOCK-001: No critical vulnerabilities found (simulated).".to_string(),
            "MOCK-002: Remember to sanitize user input (simulated).".to_string(),
        ])
    }
}
