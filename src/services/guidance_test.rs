use super::*;
use crate::state::test_helpers;

fn completed_flags(steps: &[GuidanceStep]) -> Vec<bool> {
    steps.iter().map(|s| s.completed).collect()
}

// =============================================================================
// advance
// =============================================================================

#[test]
fn seed_has_three_pending_steps() {
    let steps = seed_steps();
    let titles: Vec<&str> = steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Understand Your Rights", "Gather Documentation", "Review Legal Options"]);
    assert_eq!(completed_flags(&steps), vec![false, false, false]);
    assert_eq!(steps[2].id, "step_3");
}

#[test]
fn first_turn_completes_first_step_only() {
    let steps = advance(seed_steps(), 1);
    assert_eq!(completed_flags(&steps), vec![true, false, false]);
}

#[test]
fn second_turn_changes_nothing() {
    let steps = advance(seed_steps(), 2);
    assert_eq!(steps, seed_steps());
}

#[test]
fn third_turn_appends_next_steps() {
    let steps = advance(advance(seed_steps(), 1), 3);
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[3].title, NEXT_STEPS_TITLE);
    assert_eq!(steps[3].id, "step_4");
    assert!(!steps[3].completed);
    assert!(steps[0].completed);
}

#[test]
fn third_turn_again_does_not_append_twice() {
    let once = advance(seed_steps(), 3);
    let twice = advance(once.clone(), 3);
    assert_eq!(twice.len(), 4);
    assert_eq!(once, twice);
}

#[test]
fn later_turns_are_inert() {
    let steps = advance(seed_steps(), 3);
    assert_eq!(advance(steps.clone(), 7), steps);
    assert_eq!(advance(steps.clone(), 0), steps);
}

#[test]
fn first_turn_on_empty_list_is_noop() {
    assert!(advance(Vec::new(), 1).is_empty());
}

#[test]
fn third_turn_on_empty_list_appends_first_id() {
    let steps = advance(Vec::new(), 3);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].id, "step_1");
}

// =============================================================================
// store
// =============================================================================

#[tokio::test]
async fn store_update_and_get() {
    let state = test_helpers::test_app_state();
    assert!(get_steps(&state, "case_a").await.is_empty());
    update_guidance(&state, "case_a", seed_steps()).await;
    assert_eq!(get_steps(&state, "case_a").await.len(), 3);
    assert!(get_steps(&state, "case_b").await.is_empty());
}

#[tokio::test]
async fn store_mark_step_completed() {
    let state = test_helpers::test_app_state();
    update_guidance(&state, "case_a", seed_steps()).await;

    let steps = mark_step_completed(&state, "case_a", "step_2", true)
        .await
        .unwrap();
    assert_eq!(completed_flags(&steps), vec![false, true, false]);

    let steps = mark_step_completed(&state, "case_a", "step_2", false)
        .await
        .unwrap();
    assert_eq!(completed_flags(&steps), vec![false, false, false]);
}

#[tokio::test]
async fn store_mark_unknown_step_returns_none() {
    let state = test_helpers::test_app_state();
    update_guidance(&state, "case_a", seed_steps()).await;
    assert!(mark_step_completed(&state, "case_a", "step_9", true).await.is_none());
    assert!(mark_step_completed(&state, "missing", "step_1", true).await.is_none());
}

#[tokio::test]
async fn store_clear_removes_only_that_case() {
    let state = test_helpers::test_app_state();
    update_guidance(&state, "case_a", seed_steps()).await;
    update_guidance(&state, "case_b", seed_steps()).await;
    clear_guidance(&state, "case_a").await;
    assert!(get_steps(&state, "case_a").await.is_empty());
    assert_eq!(get_steps(&state, "case_b").await.len(), 3);
}

#[tokio::test]
async fn store_advance_builds_on_latest_steps() {
    let state = test_helpers::test_app_state();
    update_guidance(&state, "case_a", seed_steps()).await;
    mark_step_completed(&state, "case_a", "step_3", true).await.unwrap();

    let steps = advance_stored(&state, "case_a", 1).await;

    assert_eq!(completed_flags(&steps), vec![true, false, true]);
    assert_eq!(get_steps(&state, "case_a").await, steps);
}

#[tokio::test]
async fn store_advance_third_turn_on_missing_case() {
    let state = test_helpers::test_app_state();
    let steps = advance_stored(&state, "case_new", 3).await;
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].id, "step_1");
    assert_eq!(get_steps(&state, "case_new").await.len(), 1);
}
