//! AI provider capability and resolution.
//!
//! The [`AiProvider`] trait decouples the pipeline from the actual AI
//! backend. Variants share no state; adding a backend means implementing
//! the two operations. Tests use the offline [`mock::MockProvider`]
//! without any network access.

pub mod mock;
pub mod remote;

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::io::settings::Settings;
use mock::MockProvider;
use remote::RemoteProvider;

/// Abstraction over AI code-generation backends.
pub trait AiProvider {
    /// Generate code for a natural-language prompt, with the project
    /// rules document as opaque context.
    fn generate_code(&self, prompt: &str, context: &str) -> Result<String>;

    /// Audit source text and return finding lines in reported order.
    fn audit_security(&self, code: &str) -> Result<Vec<String>>;
}

/// Resolve a provider label into a concrete backend.
///
/// `"mock"` selects the offline provider; any other label selects the
/// remote provider built from `settings`. A remote label without a
/// configured token fails here, before any rules or git work happens.
pub fn resolve_provider(label: &str, settings: &Settings) -> Result<Box<dyn AiProvider>> {
    if label == "mock" {
        debug!("using mock provider");
        return Ok(Box::new(MockProvider));
    }
    if settings.github_token.is_empty() {
        return Err(anyhow!(
            "provider '{label}' requires a token: set SENTINEL_GITHUB_TOKEN"
        ));
    }
    debug!(provider = label, model = %settings.ai_model, "using remote provider");
    let provider = RemoteProvider::new(
        &settings.github_token,
        &settings.ai_endpoint,
        &settings.ai_model,
    )?;
    Ok(Box::new(provider))
}
