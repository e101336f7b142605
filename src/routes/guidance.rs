//! Guidance checklist routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::cases::case_error_to_status;
use crate::error::ApiError;
use crate::services::case;
use crate::services::guidance::{self, GuidanceStep};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StepsResponse {
    pub steps: Vec<GuidanceStep>,
}

#[derive(Deserialize)]
pub struct ReplaceStepsBody {
    pub steps: Vec<GuidanceStep>,
}

#[derive(Deserialize)]
pub struct UpdateStepBody {
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceBody {
    #[serde(default)]
    pub steps: Option<Vec<GuidanceStep>>,
    pub user_turns: usize,
}

/// `GET /api/cases/:id/guidance`
pub async fn get_guidance(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> Result<Json<StepsResponse>, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    let steps = guidance::get_steps(&state, &case_id).await;
    Ok(Json(StepsResponse { steps }))
}

/// `PUT /api/cases/:id/guidance`: replace the whole checklist.
pub async fn replace_guidance(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
    Json(body): Json<ReplaceStepsBody>,
) -> Result<Json<StepsResponse>, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    guidance::update_guidance(&state, &case_id, body.steps.clone()).await;
    Ok(Json(StepsResponse { steps: body.steps }))
}

/// `DELETE /api/cases/:id/guidance`
pub async fn clear_guidance(State(state): State<AppState>, Path(case_id): Path<String>) -> Result<StatusCode, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    guidance::clear_guidance(&state, &case_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/cases/:id/guidance/:step_id`: set one step's completion flag.
pub async fn update_step(
    State(state): State<AppState>,
    Path((case_id, step_id)): Path<(String, String)>,
    Json(body): Json<UpdateStepBody>,
) -> Result<Json<StepsResponse>, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    let steps = guidance::mark_step_completed(&state, &case_id, &step_id, body.completed)
        .await
        .ok_or_else(|| ApiError::not_found("E_STEP_NOT_FOUND", format!("step not found: {step_id}")))?;
    Ok(Json(StepsResponse { steps }))
}

/// `POST /api/guidance/advance`: apply the progression rules to a checklist.
///
/// Omitting `steps` starts from the seed checklist.
pub async fn advance(Json(body): Json<AdvanceBody>) -> Json<StepsResponse> {
    let steps = body.steps.unwrap_or_else(guidance::seed_steps);
    Json(StepsResponse { steps: guidance::advance(steps, body.user_turns) })
}

#[cfg(test)]
#[path = "guidance_test.rs"]
mod tests;
