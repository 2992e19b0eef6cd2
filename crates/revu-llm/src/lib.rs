//! Client for the hosted chat-completion service.
//!
//! Each call issues one synchronous request with fixed model parameters.
//! There is no retry, caching, or streaming. `FakeCompletionClient`
//! stands in for the hosted service in tests.

mod fake;
mod http;

pub use fake::FakeCompletionClient;
pub use http::HttpCompletionClient;

use thiserror::Error;

/// Environment variable holding the service credential.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("no API key configured (set GROQ_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(String),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

/// Boundary component issuing requests to the hosted language-model
/// service. Implementations are blocking from the caller's perspective.
pub trait CompletionClient: Send + Sync {
    /// Send one fully rendered prompt, return the trimmed reply text.
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Fixed parameters for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "openai/gpt-oss-120b".to_string(),
            temperature: 0.2,
            max_tokens: 200,
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    /// Read the credential from the environment. A missing key is not an
    /// error at startup; the first `complete` call fails instead.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()),
            ..Default::default()
        }
    }
}
