use super::*;
use crate::services::legal_terms::extract_legal_terms;

fn file(name: &str, content_type: &str, size: usize) -> IncomingFile {
    IncomingFile { name: name.into(), content_type: content_type.into(), size }
}

// =============================================================================
// uploads
// =============================================================================

#[test]
fn register_uploads_builds_metadata() {
    let files = vec![file("notice.jpg", "image/jpeg", 2048), file("lease.pdf", "application/pdf", 4096)];
    let docs = register_uploads("case_1_abc", &files).unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs[0].id.starts_with("file_"));
    assert!(docs[1].id.ends_with("_1"));
    assert_eq!(docs[1].url, "/api/files/case_1_abc/lease.pdf");
    assert_eq!(docs[0].size, 2048);

    let json = serde_json::to_value(&docs[0]).unwrap();
    assert_eq!(json["type"], "image/jpeg");
}

#[test]
fn register_uploads_requires_case_id() {
    let files = vec![file("a.png", "image/png", 1)];
    assert!(matches!(register_uploads(" ", &files), Err(MediaError::MissingCaseId)));
}

#[test]
fn register_uploads_requires_files() {
    assert!(matches!(register_uploads("case_1", &[]), Err(MediaError::NoFiles)));
}

// =============================================================================
// OCR
// =============================================================================

#[test]
fn image_named_notice_reads_as_eviction() {
    assert!(extract_text("Eviction_Notice.JPG", "image/jpeg").starts_with("NOTICE OF EVICTION"));
}

#[test]
fn image_named_salary_reads_as_wage_slip() {
    assert!(extract_text("salary-jan.png", "image/png").starts_with("WAGE PAYMENT NOTICE"));
}

#[test]
fn other_image_is_generic() {
    assert!(extract_text("photo.png", "image/png").contains("quality of the image"));
}

#[test]
fn pdf_agreement_reads_as_rental_agreement() {
    assert!(extract_text("rent-agreement.pdf", "application/pdf").starts_with("RENTAL AGREEMENT"));
    assert!(extract_text("court.pdf", "application/pdf").contains("PDF document"));
}

#[test]
fn unsupported_type_gets_fallback() {
    assert!(extract_text("eviction.docx", "application/msword").starts_with("DOCUMENT CONTENT"));
}

#[test]
fn eviction_notice_feeds_term_extraction() {
    let terms = extract_legal_terms(extract_text("notice.jpg", "image/jpeg"));
    assert!(terms.contains(&"eviction"));
    assert!(terms.contains(&"rent"));
}

// =============================================================================
// speech
// =============================================================================

#[test]
fn transcribe_by_language() {
    assert!(transcribe("en").starts_with("I received an eviction notice"));
    assert!(transcribe("hi").starts_with("मुझे"));
    assert!(transcribe("ta").starts_with("கடந்த"));
}

#[test]
fn transcribe_unknown_language_falls_back_to_english() {
    assert_eq!(transcribe("fr"), transcribe("en"));
}
