use super::*;
use crate::services::{chat, guidance};
use crate::state::test_helpers;

#[test]
fn case_id_shape() {
    let id = generate_case_id();
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "case");
    assert!(parts[1].parse::<i128>().is_ok());
    assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
    assert!(parts[2].bytes().all(|b| BASE36.contains(&b)));
}

#[test]
fn case_ids_are_unique() {
    assert_ne!(generate_case_id(), generate_case_id());
}

#[test]
fn status_serializes_kebab_case() {
    assert_eq!(serde_json::to_string(&CaseStatus::InProgress).unwrap(), "\"in-progress\"");
    assert_eq!(serde_json::to_string(&CaseStatus::New).unwrap(), "\"new\"");
}

#[test]
fn case_serializes_camel_case() {
    let case = Case {
        id: "case_1_abcdefgh".into(),
        title: "t".into(),
        case_type: "eviction".into(),
        description: "d".into(),
        created_at: "2025-03-15T00:00:00Z".into(),
        status: CaseStatus::New,
    };
    let json = serde_json::to_value(&case).unwrap();
    assert_eq!(json["caseType"], "eviction");
    assert_eq!(json["createdAt"], "2025-03-15T00:00:00Z");
    assert_eq!(json["status"], "new");
}

#[tokio::test]
async fn create_assigns_new_status() {
    let state = test_helpers::test_app_state();
    let case = create_case(&state, test_helpers::new_case("Unpaid wages", "My employer withheld my salary"))
        .await
        .unwrap();
    assert_eq!(case.status, CaseStatus::New);
    assert!(case.id.starts_with("case_"));
    assert!(!case.created_at.is_empty());
    assert_eq!(list_cases(&state).await.len(), 1);
}

#[tokio::test]
async fn create_rejects_blank_title_or_description() {
    let state = test_helpers::test_app_state();
    let missing_title = create_case(&state, test_helpers::new_case("  ", "description")).await;
    assert!(matches!(missing_title, Err(CaseError::MissingFields)));
    let missing_description = create_case(&state, test_helpers::new_case("title", "")).await;
    assert!(matches!(missing_description, Err(CaseError::MissingFields)));
    assert!(list_cases(&state).await.is_empty());
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let state = test_helpers::test_app_state();
    let first = test_helpers::seed_case(&state).await;
    let second = test_helpers::seed_case(&state).await;
    let ids: Vec<String> = list_cases(&state).await.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn get_unknown_case_is_not_found() {
    let state = test_helpers::test_app_state();
    assert!(matches!(get_case(&state, "case_0_missing").await, Err(CaseError::NotFound(_))));
}

#[tokio::test]
async fn update_touches_only_supplied_fields() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_case(&state).await;
    let before = get_case(&state, &id).await.unwrap();

    let patch = CasePatch { status: Some(CaseStatus::InProgress), ..CasePatch::default() };
    let after = update_case(&state, &id, patch).await.unwrap();

    assert_eq!(after.status, CaseStatus::InProgress);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(get_case(&state, &id).await.unwrap(), after);
}

#[tokio::test]
async fn update_unknown_case_is_not_found() {
    let state = test_helpers::test_app_state();
    let result = update_case(&state, "nope", CasePatch::default()).await;
    assert!(matches!(result, Err(CaseError::NotFound(_))));
}

#[tokio::test]
async fn delete_clears_messages_and_guidance() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_case(&state).await;
    let other = test_helpers::seed_case(&state).await;
    chat::add_message(&state, &id, "hello", chat::Sender::User).await;
    chat::add_message(&state, &other, "hi", chat::Sender::User).await;
    guidance::update_guidance(&state, &id, guidance::seed_steps()).await;
    state.rate_limiter.check_and_record(&id).unwrap();

    delete_case(&state, &id).await.unwrap();

    assert!(get_case(&state, &id).await.is_err());
    assert!(chat::case_messages(&state, &id).await.is_empty());
    assert_eq!(chat::case_messages(&state, &other).await.len(), 1);
    assert!(guidance::get_steps(&state, &id).await.is_empty());
    assert!(!state.rate_limiter.tracks_case(&id));
}

#[tokio::test]
async fn delete_unknown_case_is_not_found() {
    let state = test_helpers::test_app_state();
    assert!(matches!(delete_case(&state, "nope").await, Err(CaseError::NotFound(_))));
}
