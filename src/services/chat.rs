//! Chat service: case conversation, prompt assembly, and guidance updates.
//!
//! DESIGN
//! ======
//! Two entry points share the prompt builder:
//! - [`generate_reply`] is stateless: the caller supplies case details and the
//!   full history (the `/api/chat` contract).
//! - [`converse`] is case-scoped: it records the user turn, pulls related
//!   precedents from the case description, asks the LLM, records the reply,
//!   and advances the guidance checklist by the number of user turns.
//!
//! The LLM receives one user message holding the whole transcript; the
//! persona and language directive travel as the system prompt.

use std::fmt::Write;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::case::{self, Case, CaseError, now_rfc3339};
use super::guidance::{self, GuidanceStep};
use super::precedent::{Precedent, search_precedents};
use super::translate::{language_name, translate};
use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};
use crate::rate_limit::{RateLimitError, env_parse};
use crate::state::AppState;

const DEFAULT_AI_MAX_TOKENS: u32 = 1024;

const SYSTEM_PROMPT: &str = "You are a helpful AI legal assistant designed to provide guidance on common legal issues. Focus on providing practical, step-by-step guidance for low-income individuals who cannot afford traditional legal services. Provide information about legal processes, document requirements, and potential resources. Always clarify that you are not providing legal advice and recommend consulting with a legal professional when appropriate.";

const APOLOGY: &str = "I'm sorry, there was an error processing your request. Please try again.";

fn ai_max_tokens() -> u32 {
    static VALUE: OnceLock<u32> = OnceLock::new();
    *VALUE.get_or_init(|| env_parse("AI_MAX_TOKENS", DEFAULT_AI_MAX_TOKENS))
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub case_id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: String,
}

/// One entry of a caller-supplied transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: Sender,
    pub content: String,
}

/// Case context sent along with a stateless chat request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub title: Option<String>,
    pub case_type: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub related_cases: Vec<Precedent>,
}

impl CaseDetails {
    fn from_case(case: &Case, related_cases: Vec<Precedent>) -> Self {
        Self {
            title: Some(case.title.clone()),
            case_type: Some(case.case_type.clone()),
            description: Some(case.description.clone()),
            related_cases,
        }
    }
}

/// State returned when a chat session is opened.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub messages: Vec<ChatMessage>,
    pub steps: Vec<GuidanceStep>,
}

/// Outcome of one case-scoped user turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub reply: ChatMessage,
    pub steps: Vec<GuidanceStep>,
    pub related_cases: Vec<Precedent>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("No messages provided")]
    EmptyConversation,
    #[error("message content is empty")]
    EmptyMessage,
    #[error("LLM returned an empty reply")]
    EmptyReply,
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error("rate limited: {0}")]
    RateLimited(#[from] RateLimitError),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::EmptyConversation => "E_EMPTY_CONVERSATION",
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
            Self::EmptyReply => "E_EMPTY_REPLY",
            Self::Case(e) => e.error_code(),
            Self::RateLimited(e) => e.error_code(),
            Self::Llm(_) => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) | Self::EmptyReply => true,
            Self::Llm(e) => e.retryable(),
            _ => false,
        }
    }
}

// =============================================================================
// MESSAGE STORE
// =============================================================================

fn new_message(case_id: &str, content: &str, sender: Sender) -> ChatMessage {
    ChatMessage {
        id: format!("msg_{}", Uuid::new_v4().simple()),
        case_id: case_id.to_string(),
        content: content.to_string(),
        sender,
        timestamp: now_rfc3339(),
    }
}

/// Append a message to a case transcript.
pub async fn add_message(state: &AppState, case_id: &str, content: &str, sender: Sender) -> ChatMessage {
    let message = new_message(case_id, content, sender);
    state.messages.write().await.push(message.clone());
    message
}

/// Append a user message and return the case transcript including it, plus
/// the number of user turns so far. Both are taken under the same write lock
/// so concurrent turns on one case never observe the same count.
async fn record_user_turn(state: &AppState, case_id: &str, content: &str) -> (Vec<HistoryEntry>, usize) {
    let mut messages = state.messages.write().await;
    messages.push(new_message(case_id, content, Sender::User));

    let history: Vec<HistoryEntry> = messages
        .iter()
        .filter(|m| m.case_id == case_id)
        .map(|m| HistoryEntry { sender: m.sender, content: m.content.clone() })
        .collect();
    let user_turns = history
        .iter()
        .filter(|entry| entry.sender == Sender::User)
        .count();
    (history, user_turns)
}

/// Messages for one case, oldest first.
pub async fn case_messages(state: &AppState, case_id: &str) -> Vec<ChatMessage> {
    let messages = state.messages.read().await;
    messages
        .iter()
        .filter(|m| m.case_id == case_id)
        .cloned()
        .collect()
}

/// Delete one message of a case. Returns whether anything was removed; a
/// message belonging to another case is left alone.
pub async fn delete_message(state: &AppState, case_id: &str, message_id: &str) -> bool {
    let mut messages = state.messages.write().await;
    let before = messages.len();
    messages.retain(|m| !(m.case_id == case_id && m.id == message_id));
    messages.len() != before
}

pub async fn clear_case_messages(state: &AppState, case_id: &str) {
    state
        .messages
        .write()
        .await
        .retain(|m| m.case_id != case_id);
}

// =============================================================================
// PROMPTS
// =============================================================================

/// Opening assistant message for a case.
#[must_use]
pub fn greeting(case: &Case) -> String {
    format!(
        "Hello! I'm your AI legal assistant. I've reviewed your case about \"{}\". I'm here to help guide you through this process. What specific questions do you have about your {} case?",
        case.title, case.case_type
    )
}

/// Persona plus a response-language directive for non-English sessions.
#[must_use]
pub fn build_system_prompt(language: &str) -> String {
    let mut prompt = SYSTEM_PROMPT.to_string();
    if language != "en" {
        let _ = write!(prompt, " Please respond in {}.", language_name(language));
    }
    prompt
}

/// Case details, related precedents, and the transcript as one prompt.
///
/// The last entry is repeated as the final `User:` line, followed by an open
/// `Assistant:` turn.
#[must_use]
pub fn build_user_prompt(details: &CaseDetails, history: &[HistoryEntry]) -> String {
    let or = |value: &Option<String>, fallback: &'static str| -> String {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };

    let mut prompt = String::new();
    let _ = writeln!(prompt, "Case Details:");
    let _ = writeln!(prompt, "Title: {}", or(&details.title, "Not specified"));
    let _ = writeln!(prompt, "Type: {}", or(&details.case_type, "Not specified"));
    let _ = writeln!(prompt, "Description: {}", or(&details.description, "Not provided"));
    prompt.push('\n');

    if details.related_cases.is_empty() {
        let _ = writeln!(prompt, "No specific legal cases available for reference.");
    } else {
        let _ = writeln!(prompt, "Related legal cases:");
        for precedent in &details.related_cases {
            let summary = if precedent.summary.is_empty() { "No summary available" } else { precedent.summary.as_str() };
            let _ = writeln!(prompt, "- {} ({}): {summary}", precedent.title, precedent.citation);
        }
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "Chat History:");
    for entry in history {
        let speaker = match entry.sender {
            Sender::User => "User",
            Sender::Ai => "Assistant",
        };
        let _ = writeln!(prompt, "{speaker}: {}", entry.content);
    }
    prompt.push('\n');

    if let Some(last) = history.last() {
        let _ = writeln!(prompt, "User: {}", last.content);
    }
    prompt.push_str("Assistant:");
    prompt
}

// =============================================================================
// LLM
// =============================================================================

/// Stateless reply for a caller-supplied transcript.
///
/// # Errors
///
/// Returns `EmptyConversation` when `history` is empty, `Llm` when the
/// provider call fails, and `EmptyReply` when it returns no text.
pub async fn generate_reply(
    llm: &Arc<dyn LlmChat>,
    details: &CaseDetails,
    history: &[HistoryEntry],
    language: &str,
) -> Result<String, ChatError> {
    if history.is_empty() {
        return Err(ChatError::EmptyConversation);
    }

    let system = build_system_prompt(language);
    let prompt = build_user_prompt(details, history);
    let response = llm
        .chat(ai_max_tokens(), &system, &[Message::user(prompt)])
        .await?;
    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "chat: llm reply"
    );

    let text = response.text();
    if text.trim().is_empty() {
        return Err(ChatError::EmptyReply);
    }
    Ok(text)
}

// =============================================================================
// CASE SESSION
// =============================================================================

/// Open the chat for a case. A case without messages gets the greeting and
/// the seed guidance steps; an existing conversation is returned as-is.
///
/// # Errors
///
/// Returns `Case(NotFound)` for an unknown case.
pub async fn start_session(state: &AppState, case_id: &str) -> Result<Session, ChatError> {
    let case = case::get_case(state, case_id).await?;
    ensure_session(state, &case).await;
    Ok(Session { messages: case_messages(state, case_id).await, steps: guidance::get_steps(state, case_id).await })
}

/// Seed the greeting and checklist if the case has no messages yet. The
/// transcript lock is held while seeding so only one caller does it.
async fn ensure_session(state: &AppState, case: &Case) {
    let mut messages = state.messages.write().await;
    if messages.iter().any(|m| m.case_id == case.id) {
        return;
    }

    messages.push(new_message(&case.id, &greeting(case), Sender::Ai));
    guidance::update_guidance(state, &case.id, guidance::seed_steps()).await;
    info!(case_id = %case.id, "chat: session started");
}

/// Handle one user turn on a case.
///
/// # Errors
///
/// Fails without recording anything for an unconfigured LLM, unknown case,
/// blank content, or rate limiting. An LLM failure records the user turn and
/// an apology, leaves guidance untouched, and returns the error.
pub async fn converse(state: &AppState, case_id: &str, content: &str, language: &str) -> Result<Turn, ChatError> {
    let llm = state.llm.clone().ok_or(ChatError::LlmNotConfigured)?;
    let case = case::get_case(state, case_id).await?;
    if content.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    state.rate_limiter.check_and_record(case_id)?;

    ensure_session(state, &case).await;
    let (history, user_turns) = record_user_turn(state, case_id, content).await;
    let related_cases = search_precedents(&case.description, &state.precedents);
    let details = CaseDetails::from_case(&case, related_cases.clone());

    let text = match generate_reply(&llm, &details, &history, language).await {
        Ok(text) => text,
        Err(e) => {
            warn!(%case_id, error = %e, "chat: reply failed");
            add_message(state, case_id, translate(APOLOGY, language), Sender::Ai).await;
            return Err(e);
        }
    };
    let reply = add_message(state, case_id, &text, Sender::Ai).await;

    let steps = guidance::advance_stored(state, case_id, user_turns).await;
    info!(%case_id, user_turns, steps = steps.len(), "chat: turn complete");

    Ok(Turn { reply, steps, related_cases })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
