//! Remote provider for OpenAI-compatible chat-completion endpoints
//! (Azure AI Inference / GitHub Models).

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::AiProvider;

/// One network round trip per call; a hung backend is cut off here
/// instead of blocking the pipeline indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const CODE_SYSTEM_PROMPT: &str = "You are a senior developer. Generate production-ready code \
     that follows TDD, OWASP security best practices, and Atomic Design principles. \
     Return only code, no explanations.";

const AUDIT_SYSTEM_PROMPT: &str = "You are a security auditor. Analyze the following code for \
     OWASP Top-10 vulnerabilities. Return a numbered list of findings, one per line.";

/// Provider that delegates both operations to a remote chat endpoint.
///
/// No retries, no caching: transport and HTTP-status failures propagate
/// to the pipeline, which aborts at the step they occurred.
pub struct RemoteProvider {
    client: Client,
    token: String,
    endpoint: String,
    model: String,
}

impl RemoteProvider {
    pub fn new(token: &str, endpoint: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            token: token.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    #[instrument(skip_all, fields(model = %self.model))]
    fn chat(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.endpoint);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };
        debug!(url = %url, "sending chat completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .with_context(|| format!("send chat request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(anyhow!(
                "chat request failed with status {status}: {}",
                body.trim()
            ));
        }
        let parsed: ChatResponse = response.json().context("parse chat response")?;
        Ok(first_choice_text(parsed))
    }
}

impl AiProvider for RemoteProvider {
    fn generate_code(&self, prompt: &str, context: &str) -> Result<String> {
        self.chat(CODE_SYSTEM_PROMPT, &generation_user_content(prompt, context))
    }

    fn audit_security(&self, code: &str) -> Result<Vec<String>> {
        let report = self.chat(AUDIT_SYSTEM_PROMPT, code)?;
        Ok(parse_findings(&report))
    }
}

fn generation_user_content(prompt: &str, context: &str) -> String {
    format!("Context:\n{context}\n\nRequest:\n{prompt}")
}

/// Extract the first choice's message text; a response without content
/// is a valid (if degenerate) empty generation.
fn first_choice_text(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

/// Split an audit reply into finding lines: trimmed, empties dropped,
/// original order kept. Numbering/format is not re-validated.
fn parse_findings(report: &str) -> Vec<String> {
    report
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
