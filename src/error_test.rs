use super::*;

#[derive(Debug, thiserror::Error)]
#[error("upstream unavailable")]
struct Upstream;

impl ErrorCode for Upstream {
    fn error_code(&self) -> &'static str {
        "E_UPSTREAM"
    }

    fn retryable(&self) -> bool {
        true
    }
}

#[test]
fn from_error_copies_code_message_and_hint() {
    let err = ApiError::from_error(StatusCode::BAD_GATEWAY, &Upstream);
    assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    assert_eq!(err.code, "E_UPSTREAM");
    assert_eq!(err.message, "upstream unavailable");
    assert!(err.retryable);
}

#[test]
fn bad_request_is_not_retryable() {
    let err = ApiError::bad_request("No messages provided");
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.code, "E_BAD_REQUEST");
    assert!(!err.retryable);
}

#[test]
fn into_response_keeps_status() {
    let response = ApiError::bad_request("Missing case ID").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn not_found_uses_given_code() {
    let err = ApiError::not_found("E_STEP_NOT_FOUND", "step not found: step_9");
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.code, "E_STEP_NOT_FOUND");
}
