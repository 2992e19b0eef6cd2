use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{CompletionClient, LlmConfig, LlmError};

/// Blocking client for an OpenAI-compatible chat-completion endpoint.
pub struct HttpCompletionClient {
    config: LlmConfig,
    client: reqwest::blocking::Client,
}

impl HttpCompletionClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Request(format!("build http client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Pull the trimmed reply text out of a chat-completion response body.
fn extract_content(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| LlmError::MalformedResponse("no choices in response".to_string()))?;
    let content = content.trim();
    if content.is_empty() {
        return Err(LlmError::EmptyCompletion);
    }
    Ok(content.to_string())
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey)?;

        // Single user-role turn with the fixed generation parameters.
        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "sending chat completion request"
        );

        let resp = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {key}"))
            .json(&body)
            .send()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| LlmError::Request(format!("read body: {e}")))?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_content(&text)
    }
}
