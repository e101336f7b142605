//! Guidance progression: the per-case checklist shown beside the chat.
//!
//! DESIGN
//! ======
//! Steps are values: the tracker takes the current list plus the number of
//! user turns so far and returns the next list. Storage per case lives in
//! `AppState::guidance`; the helpers at the bottom operate on that map.

use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// One checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl GuidanceStep {
    fn pending(id: String, title: &str, description: &str) -> Self {
        Self { id, title: title.into(), description: description.into(), completed: false }
    }
}

pub const NEXT_STEPS_TITLE: &str = "Next Steps";

/// Turn count that completes the first step.
const FIRST_STEP_TURN: usize = 1;
/// Turn count that appends the "Next Steps" item.
const NEXT_STEPS_TURN: usize = 3;
/// Once the list reaches this length, no further step is appended.
const MAX_AUTO_STEPS: usize = 4;

/// The three steps every new chat session starts with.
#[must_use]
pub fn seed_steps() -> Vec<GuidanceStep> {
    vec![
        GuidanceStep::pending(
            "step_1".into(),
            "Understand Your Rights",
            "First, let's make sure you understand your basic rights in this situation.",
        ),
        GuidanceStep::pending(
            "step_2".into(),
            "Gather Documentation",
            "Collect all relevant documents related to your case.",
        ),
        GuidanceStep::pending(
            "step_3".into(),
            "Review Legal Options",
            "We'll explore the legal options available to you.",
        ),
    ]
}

/// Apply the progression rules after a user turn.
///
/// - one user turn: the first step is completed
/// - three user turns with fewer than four steps: "Next Steps" is appended
///
/// An empty list stays empty for the first rule.
#[must_use]
pub fn advance(mut steps: Vec<GuidanceStep>, user_turns: usize) -> Vec<GuidanceStep> {
    if user_turns == FIRST_STEP_TURN {
        if let Some(first) = steps.first_mut() {
            first.completed = true;
        }
    }

    if user_turns == NEXT_STEPS_TURN && steps.len() < MAX_AUTO_STEPS {
        let id = format!("step_{}", steps.len() + 1);
        steps.push(GuidanceStep::pending(
            id,
            NEXT_STEPS_TITLE,
            "Based on our conversation, here are your recommended next actions.",
        ));
    }

    steps
}

// =============================================================================
// STORE
// =============================================================================

/// Current steps for a case (empty when none recorded).
pub async fn get_steps(state: &AppState, case_id: &str) -> Vec<GuidanceStep> {
    let guidance = state.guidance.read().await;
    guidance.get(case_id).cloned().unwrap_or_default()
}

/// Replace the steps for a case.
pub async fn update_guidance(state: &AppState, case_id: &str, steps: Vec<GuidanceStep>) {
    let mut guidance = state.guidance.write().await;
    guidance.insert(case_id.to_string(), steps);
}

/// Apply [`advance`] to the stored steps of a case in one write, so a
/// concurrent replace is never lost between the read and the store.
pub async fn advance_stored(state: &AppState, case_id: &str, user_turns: usize) -> Vec<GuidanceStep> {
    let mut guidance = state.guidance.write().await;
    let current = guidance.remove(case_id).unwrap_or_default();
    let steps = advance(current, user_turns);
    guidance.insert(case_id.to_string(), steps.clone());
    steps
}

/// Set the completion flag of one step. Returns the updated list, or `None`
/// when the step does not exist.
pub async fn mark_step_completed(
    state: &AppState,
    case_id: &str,
    step_id: &str,
    completed: bool,
) -> Option<Vec<GuidanceStep>> {
    let mut guidance = state.guidance.write().await;
    let steps = guidance.get_mut(case_id)?;
    let step = steps.iter_mut().find(|s| s.id == step_id)?;
    step.completed = completed;
    Some(steps.clone())
}

/// Drop every step recorded for a case.
pub async fn clear_guidance(state: &AppState, case_id: &str) {
    let mut guidance = state.guidance.write().await;
    guidance.remove(case_id);
}

#[cfg(test)]
#[path = "guidance_test.rs"]
mod tests;
