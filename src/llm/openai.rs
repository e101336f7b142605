//! OpenAI-compatible Chat Completions client.
//!
//! Works against any base URL that speaks `/chat/completions`. The system
//! prompt travels as the first message.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{ChatResponse, ContentBlock, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns `HttpClientBuild` if the HTTP client cannot be constructed.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = super::build_http_client(timeouts)?;
        Ok(Self { http, api_key, base_url })
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, non-200 status, or a malformed body.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let msgs = build_messages(system, messages);
        let body = CcRequest { model, max_tokens, messages: &msgs };
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let text = super::read_success_body(response).await?;
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage<'a>],
}

#[derive(Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CcResponse {
    model: String,
    choices: Vec<CcChoice>,
    #[serde(default)]
    usage: Option<CcUsage>,
}

#[derive(Deserialize)]
struct CcChoice {
    message: CcResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CcResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct CcUsage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

// =============================================================================
// CONVERSION
// =============================================================================

fn build_messages<'a>(system: &'a str, messages: &'a [Message]) -> Vec<CcMessage<'a>> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.is_empty() {
        out.push(CcMessage { role: "system", content: system });
    }
    out.extend(messages.iter().map(|m| CcMessage {
        role: match m.role {
            super::types::Role::User => "user",
            super::types::Role::Assistant => "assistant",
        },
        content: &m.content,
    }));
    out
}

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: CcResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = api
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response contained no choices".into()))?;

    let content = choice
        .message
        .content
        .filter(|text| !text.is_empty())
        .map(|text| vec![ContentBlock::Text { text }])
        .unwrap_or_default();
    let (input_tokens, output_tokens) = api
        .usage
        .map_or((0, 0), |u| (u.prompt_tokens, u.completion_tokens));

    Ok(ChatResponse {
        content,
        model: api.model,
        stop_reason: choice.finish_reason.unwrap_or_else(|| "stop".into()),
        input_tokens,
        output_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
