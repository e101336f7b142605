//! Precedent search and legal term extraction routes.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::legal_terms::extract_legal_terms;
use crate::services::precedent::{Precedent, search_precedents};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub cases: Vec<Precedent>,
}

#[derive(Deserialize)]
pub struct TermsBody {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TermsResponse {
    pub terms: Vec<&'static str>,
}

/// `POST /api/indian-kanoon`: precedents related to a free-text query.
///
/// Short or unmatched queries yield an empty list, never an error.
pub async fn search(State(state): State<AppState>, Json(body): Json<SearchBody>) -> Json<SearchResponse> {
    Json(SearchResponse { cases: search_precedents(&body.query, &state.precedents) })
}

/// `POST /api/terms`: legal keywords found in a text.
pub async fn terms(Json(body): Json<TermsBody>) -> Json<TermsResponse> {
    Json(TermsResponse { terms: extract_legal_terms(&body.text) })
}

#[cfg(test)]
#[path = "precedents_test.rs"]
mod tests;
