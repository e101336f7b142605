//! Multipart intake routes: document upload, OCR, and speech-to-text.
//!
//! File parts are read fully so their size is known, then dropped; only
//! metadata reaches the services.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::services::media::{self, IncomingFile, MediaError, UploadedDocument};

/// Form parts whose name starts with this are treated as documents.
const FILE_PART_PREFIX: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub files: Vec<UploadedDocument>,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: &'static str,
}

/// Parsed multipart body: text fields by name, file parts in arrival order.
#[derive(Debug, Default)]
struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<(String, IncomingFile)>,
}

impl MultipartForm {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn documents(&self) -> Vec<IncomingFile> {
        self.files
            .iter()
            .filter(|(part, _)| part.starts_with(FILE_PART_PREFIX))
            .map(|(_, file)| file.clone())
            .collect()
    }

    fn has_file(&self, part_name: &str) -> bool {
        self.files.iter().any(|(part, _)| part == part_name)
    }
}

async fn read_form(mut multipart: Multipart) -> Result<MultipartForm, MediaError> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaError::Multipart(e.to_string()))?
    {
        let part = field.name().unwrap_or_default().to_string();
        let is_file = field.file_name().is_some() || field.content_type().is_some();

        if is_file {
            let name = field.file_name().unwrap_or(part.as_str()).to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| MediaError::Multipart(e.to_string()))?;
            form.files
                .push((part, IncomingFile { name, content_type, size: bytes.len() }));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| MediaError::Multipart(e.to_string()))?;
            form.fields.insert(part, value);
        }
    }

    Ok(form)
}

/// `POST /api/cases/upload-documents`: describe uploaded files for a case.
pub async fn upload_documents(multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    let form = read_form(multipart).await.map_err(media_error_to_status)?;
    let case_id = form
        .field("caseId")
        .ok_or_else(|| media_error_to_status(MediaError::MissingCaseId))?;

    let files = media::register_uploads(case_id, &form.documents()).map_err(media_error_to_status)?;
    info!(%case_id, count = files.len(), "media: documents uploaded");
    Ok(Json(UploadResponse { files, message: "Documents uploaded successfully" }))
}

/// `POST /api/ocr`: text from the first uploaded document.
pub async fn ocr(multipart: Multipart) -> Result<Json<TextResponse>, ApiError> {
    let form = read_form(multipart).await.map_err(media_error_to_status)?;
    let documents = form.documents();
    let first = documents
        .first()
        .ok_or_else(|| media_error_to_status(MediaError::NoFiles))?;

    info!(file = %first.name, content_type = %first.content_type, "media: ocr");
    Ok(Json(TextResponse { text: media::extract_text(&first.name, &first.content_type) }))
}

/// `POST /api/speech-to-text`: transcript of the `audio` part.
pub async fn speech_to_text(multipart: Multipart) -> Result<Json<TextResponse>, ApiError> {
    let form = read_form(multipart).await.map_err(media_error_to_status)?;
    if !form.has_file("audio") {
        return Err(media_error_to_status(MediaError::NoAudio));
    }

    let language = form.field("language").unwrap_or("en");
    Ok(Json(TextResponse { text: media::transcribe(language) }))
}

pub(crate) fn media_error_to_status(err: MediaError) -> ApiError {
    ApiError::from_error(StatusCode::BAD_REQUEST, &err)
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
