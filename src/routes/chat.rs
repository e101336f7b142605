//! Chat routes: stateless completion plus case-scoped sessions.
//!
//! `/api/chat` accepts a full transcript from the caller and keeps nothing.
//! The `/api/cases/:id/...` routes read and write the message and guidance
//! stores.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::cases::case_error_to_status;
use crate::error::ApiError;
use crate::services::case;
use crate::services::chat::{self, CaseDetails, ChatError, ChatMessage, HistoryEntry, Sender, Session, Turn};
use crate::state::AppState;

/// Rate-limit bucket shared by all stateless chat requests.
const STATELESS_RATE_KEY: &str = "stateless";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    #[serde(default)]
    pub messages: Vec<HistoryEntry>,
    #[serde(default)]
    pub case_details: CaseDetails,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub response: String,
}

#[derive(Deserialize)]
pub struct AddMessageBody {
    pub content: String,
    pub sender: Option<Sender>,
}

#[derive(Deserialize)]
pub struct CaseChatBody {
    pub content: String,
    pub language: Option<String>,
}

/// `POST /api/chat`: reply to a caller-supplied transcript.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatBody>) -> Result<Json<ChatResponseBody>, ApiError> {
    let llm = state
        .llm
        .clone()
        .ok_or_else(|| chat_error_to_status(ChatError::LlmNotConfigured))?;
    if body.messages.is_empty() {
        return Err(chat_error_to_status(ChatError::EmptyConversation));
    }
    state
        .rate_limiter
        .check_and_record(STATELESS_RATE_KEY)
        .map_err(|e| chat_error_to_status(e.into()))?;

    let language = body.language.as_deref().unwrap_or("en");
    let response = chat::generate_reply(&llm, &body.case_details, &body.messages, language)
        .await
        .map_err(chat_error_to_status)?;
    Ok(Json(ChatResponseBody { response }))
}

/// `POST /api/cases/:id/session`: open the chat, seeding it on first use.
pub async fn start_session(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    chat::start_session(&state, &case_id)
        .await
        .map(Json)
        .map_err(chat_error_to_status)
}

/// `GET /api/cases/:id/messages`: transcript, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    Ok(Json(chat::case_messages(&state, &case_id).await))
}

/// `POST /api/cases/:id/messages`: append a message without calling the LLM.
pub async fn add_message(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
    Json(body): Json<AddMessageBody>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    if body.content.trim().is_empty() {
        return Err(chat_error_to_status(ChatError::EmptyMessage));
    }

    let sender = body.sender.unwrap_or(Sender::User);
    let message = chat::add_message(&state, &case_id, &body.content, sender).await;
    Ok((StatusCode::CREATED, Json(message)))
}

/// `DELETE /api/cases/:id/messages`: clear the transcript.
pub async fn clear_messages(State(state): State<AppState>, Path(case_id): Path<String>) -> Result<StatusCode, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    chat::clear_case_messages(&state, &case_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/cases/:id/messages/:message_id`: delete one message.
pub async fn delete_message(
    State(state): State<AppState>,
    Path((case_id, message_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    if !chat::delete_message(&state, &case_id, &message_id).await {
        return Err(ApiError::not_found("E_MESSAGE_NOT_FOUND", format!("message not found: {message_id}")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/cases/:id/chat`: one user turn with an AI reply.
pub async fn case_chat(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
    Json(body): Json<CaseChatBody>,
) -> Result<Json<Turn>, ApiError> {
    let language = body.language.as_deref().unwrap_or("en");
    chat::converse(&state, &case_id, &body.content, language)
        .await
        .map(Json)
        .map_err(chat_error_to_status)
}

pub(crate) fn chat_error_to_status(err: ChatError) -> ApiError {
    let status = match err {
        ChatError::Case(inner) => return case_error_to_status(inner),
        ChatError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ChatError::EmptyConversation | ChatError::EmptyMessage => StatusCode::BAD_REQUEST,
        ChatError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ChatError::Llm(_) | ChatError::EmptyReply => StatusCode::BAD_GATEWAY,
    };
    ApiError::from_error(status, &err)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
