//! Translation route (simulated).

use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::translate::translate as translate_text;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    pub text: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// `POST /api/translate`
pub async fn translate(Json(body): Json<TranslateBody>) -> Result<Json<TranslateResponse>, ApiError> {
    let (Some(text), Some(target)) = (non_empty(body.text), non_empty(body.target_language)) else {
        return Err(ApiError::bad_request("Missing text or target language"));
    };
    let translated_text = translate_text(&text, &target).to_string();
    Ok(Json(TranslateResponse { translated_text }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
