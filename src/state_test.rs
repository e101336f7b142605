use super::*;

#[tokio::test]
async fn new_state_is_empty() {
    let state = test_helpers::test_app_state();
    assert!(state.cases.read().await.is_empty());
    assert!(state.messages.read().await.is_empty());
    assert!(state.guidance.read().await.is_empty());
    assert!(state.llm.is_none());
}

#[tokio::test]
async fn clones_share_stores() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    let id = test_helpers::seed_case(&state).await;
    let cases = other.cases.read().await;
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id, id);
}

#[test]
fn state_carries_injected_table() {
    let state = AppState::new(PrecedentTable::new(), None);
    assert_eq!(state.precedents.categories().count(), 0);
}
