//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Cases, chat messages and guidance checklists live in process-local maps
//! that reset on restart. The precedent table is built once and shared
//! read-only.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::llm::LlmChat;
use crate::rate_limit::RateLimiter;
use crate::services::case::Case;
use crate::services::chat::ChatMessage;
use crate::services::guidance::GuidanceStep;
use crate::services::precedent::PrecedentTable;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Submitted cases in creation order.
    pub cases: Arc<RwLock<Vec<Case>>>,
    /// Chat transcript across all cases, in arrival order.
    pub messages: Arc<RwLock<Vec<ChatMessage>>>,
    /// Guidance checklist keyed by case ID.
    pub guidance: Arc<RwLock<HashMap<String, Vec<GuidanceStep>>>>,
    pub precedents: Arc<PrecedentTable>,
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// In-memory rate limiter for LLM requests.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(precedents: PrecedentTable, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self {
            cases: Arc::new(RwLock::new(Vec::new())),
            messages: Arc::new(RwLock::new(Vec::new())),
            guidance: Arc::new(RwLock::new(HashMap::new())),
            precedents: Arc::new(precedents),
            llm,
            rate_limiter: RateLimiter::new(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
