//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` plus a health probe. Every
//! route shares one `AppState`; CORS is open, requests are traced, and
//! responses are gzip-compressed when the client accepts it.

pub mod cases;
pub mod chat;
pub mod guidance;
pub mod media;
pub mod precedents;
pub mod translate;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/cases", get(cases::list_cases))
        .route("/api/cases/create", post(cases::create_case))
        .route("/api/cases/upload-documents", post(media::upload_documents))
        .route(
            "/api/cases/{id}",
            get(cases::get_case)
                .patch(cases::update_case)
                .delete(cases::delete_case),
        )
        .route("/api/cases/{id}/session", post(chat::start_session))
        .route(
            "/api/cases/{id}/messages",
            get(chat::list_messages)
                .post(chat::add_message)
                .delete(chat::clear_messages),
        )
        .route("/api/cases/{id}/messages/{message_id}", delete(chat::delete_message))
        .route("/api/cases/{id}/chat", post(chat::case_chat))
        .route(
            "/api/cases/{id}/guidance",
            get(guidance::get_guidance)
                .put(guidance::replace_guidance)
                .delete(guidance::clear_guidance),
        )
        .route("/api/cases/{id}/guidance/{step_id}", patch(guidance::update_step))
        .route("/api/guidance/advance", post(guidance::advance))
        .route("/api/indian-kanoon", post(precedents::search))
        .route("/api/precedents", post(precedents::search))
        .route("/api/terms", post(precedents::terms))
        .route("/api/chat", post(chat::chat))
        .route("/api/translate", post(translate::translate))
        .route("/api/ocr", post(media::ocr))
        .route("/api/speech-to-text", post(media::speech_to_text))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
