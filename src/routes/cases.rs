//! Case CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::services::case::{self, Case, CaseError, CasePatch, NewCase};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseResponse {
    pub case_id: String,
    pub message: &'static str,
}

/// `POST /api/cases/create`: submit a new case.
pub async fn create_case(
    State(state): State<AppState>,
    Json(body): Json<NewCase>,
) -> Result<Json<CreateCaseResponse>, ApiError> {
    let created = case::create_case(&state, body)
        .await
        .map_err(case_error_to_status)?;
    Ok(Json(CreateCaseResponse { case_id: created.id, message: "Case created successfully" }))
}

/// `GET /api/cases`: list cases in creation order.
pub async fn list_cases(State(state): State<AppState>) -> Json<Vec<Case>> {
    Json(case::list_cases(&state).await)
}

/// `GET /api/cases/:id`: fetch one case.
pub async fn get_case(State(state): State<AppState>, Path(case_id): Path<String>) -> Result<Json<Case>, ApiError> {
    case::get_case(&state, &case_id)
        .await
        .map(Json)
        .map_err(case_error_to_status)
}

/// `PATCH /api/cases/:id`: update the supplied fields.
pub async fn update_case(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
    Json(patch): Json<CasePatch>,
) -> Result<Json<Case>, ApiError> {
    case::update_case(&state, &case_id, patch)
        .await
        .map(Json)
        .map_err(case_error_to_status)
}

/// `DELETE /api/cases/:id`: delete a case with its messages and guidance.
pub async fn delete_case(State(state): State<AppState>, Path(case_id): Path<String>) -> Result<StatusCode, ApiError> {
    case::delete_case(&state, &case_id)
        .await
        .map_err(case_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn case_error_to_status(err: CaseError) -> ApiError {
    let status = match err {
        CaseError::MissingFields => StatusCode::BAD_REQUEST,
        CaseError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    ApiError::from_error(status, &err)
}

#[cfg(test)]
#[path = "cases_test.rs"]
mod tests;
