//! Case service: submission, lookup, and edits of legal cases.
//!
//! DESIGN
//! ======
//! Cases live in `AppState::cases` in creation order. IDs follow the
//! `case_<unix-millis>_<8 base-36 chars>` shape the front-end expects.
//! Status is stored but never advanced automatically; only explicit edits
//! move a case out of `new`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::state::AppState;

const ID_SUFFIX_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    New,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub title: String,
    pub case_type: String,
    pub description: String,
    /// RFC 3339, UTC.
    pub created_at: String,
    pub status: CaseStatus,
}

/// A case submission before an ID is assigned.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub description: String,
}

/// Partial edit. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePatch {
    pub title: Option<String>,
    pub case_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
}

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Missing required case information")]
    MissingFields,
    #[error("case not found: {0}")]
    NotFound(String),
}

impl crate::error::ErrorCode for CaseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields => "E_MISSING_FIELDS",
            Self::NotFound(_) => "E_CASE_NOT_FOUND",
        }
    }
}

// =============================================================================
// IDS + TIMESTAMPS
// =============================================================================

pub(crate) fn now_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

pub(crate) fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Generate a case ID: `case_<unix-millis>_<8 base-36 chars>`.
#[must_use]
pub fn generate_case_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!("case_{}_{suffix}", now_millis())
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Validate and store a new case.
///
/// # Errors
///
/// Returns `MissingFields` if the title or description is blank.
pub async fn create_case(state: &AppState, input: NewCase) -> Result<Case, CaseError> {
    if input.title.trim().is_empty() || input.description.trim().is_empty() {
        return Err(CaseError::MissingFields);
    }

    let case = Case {
        id: generate_case_id(),
        title: input.title,
        case_type: input.case_type,
        description: input.description,
        created_at: now_rfc3339(),
        status: CaseStatus::New,
    };

    info!(case_id = %case.id, case_type = %case.case_type, "case: created");
    state.cases.write().await.push(case.clone());
    Ok(case)
}

pub async fn list_cases(state: &AppState) -> Vec<Case> {
    state.cases.read().await.clone()
}

/// # Errors
///
/// Returns `NotFound` if no case has this ID.
pub async fn get_case(state: &AppState, case_id: &str) -> Result<Case, CaseError> {
    let cases = state.cases.read().await;
    cases
        .iter()
        .find(|c| c.id == case_id)
        .cloned()
        .ok_or_else(|| CaseError::NotFound(case_id.to_string()))
}

/// Apply a partial edit and return the updated case.
///
/// # Errors
///
/// Returns `NotFound` if no case has this ID.
pub async fn update_case(state: &AppState, case_id: &str, patch: CasePatch) -> Result<Case, CaseError> {
    let mut cases = state.cases.write().await;
    let case = cases
        .iter_mut()
        .find(|c| c.id == case_id)
        .ok_or_else(|| CaseError::NotFound(case_id.to_string()))?;

    if let Some(title) = patch.title {
        case.title = title;
    }
    if let Some(case_type) = patch.case_type {
        case.case_type = case_type;
    }
    if let Some(description) = patch.description {
        case.description = description;
    }
    if let Some(status) = patch.status {
        case.status = status;
    }

    Ok(case.clone())
}

/// Remove a case together with its messages, guidance, and rate-limit window.
///
/// # Errors
///
/// Returns `NotFound` if no case has this ID.
pub async fn delete_case(state: &AppState, case_id: &str) -> Result<(), CaseError> {
    {
        let mut cases = state.cases.write().await;
        let before = cases.len();
        cases.retain(|c| c.id != case_id);
        if cases.len() == before {
            return Err(CaseError::NotFound(case_id.to_string()));
        }
    }

    super::chat::clear_case_messages(state, case_id).await;
    super::guidance::clear_guidance(state, case_id).await;
    state.rate_limiter.forget_case(case_id);
    info!(%case_id, "case: deleted");
    Ok(())
}

#[cfg(test)]
#[path = "case_test.rs"]
mod tests;
