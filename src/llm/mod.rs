//! LLM: multi-provider adapter for the legal assistant chat.
//!
//! DESIGN
//! ======
//! Configured from environment variables. `LlmClient` dispatches to Gemini
//! or an `OpenAI`-compatible endpoint based on `LLM_PROVIDER`; callers only see the
//! [`LlmChat`] trait so tests can substitute a mock.

pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use std::time::Duration;

use config::{LlmConfig, LlmProviderKind, LlmTimeouts};
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client for the configured provider.
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    OpenAi(openai::OpenAiClient),
    Gemini(gemini::GeminiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables (see [`LlmConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.openai_base_url,
                config.timeouts,
            )?),
            LlmProviderKind::Gemini => LlmProvider::Gemini(gemini::GeminiClient::new(
                config.api_key,
                config.gemini_base_url,
                config.timeouts,
            )?),
        };
        Ok(Self { inner, model })
    }

    /// Return the configured model name (e.g. `"gemini-2.0-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        match &self.inner {
            LlmProvider::OpenAi(c) => c.chat(&self.model, max_tokens, system, messages).await,
            LlmProvider::Gemini(c) => c.chat(&self.model, max_tokens, system, messages).await,
        }
    }
}

// =============================================================================
// HTTP HELPERS
// =============================================================================

fn build_http_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Read the body, turning any non-200 status into `ApiResponse`.
async fn read_success_body(response: reqwest::Response) -> Result<String, LlmError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    if status != 200 {
        return Err(LlmError::ApiResponse { status, body: text });
    }
    Ok(text)
}
