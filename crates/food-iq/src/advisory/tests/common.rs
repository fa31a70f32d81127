use crate::advisory::{AdvisoryEngine, AdvisoryResult, HealthProfile};

pub(super) fn engine() -> AdvisoryEngine {
    AdvisoryEngine::standard()
}

pub(super) fn advise(food: &str, conditions: &[&str]) -> AdvisoryResult {
    engine().evaluate(food, conditions, None::<Vec<String>>)
}

pub(super) fn advise_with_goals(food: &str, conditions: &[&str], goals: &[&str]) -> AdvisoryResult {
    engine().evaluate(food, conditions, Some(goals))
}

pub(super) fn profile(conditions: &[&str], goals: &[&str]) -> HealthProfile {
    HealthProfile::from_raw(conditions, Some(goals))
}

pub(super) fn assert_empty(result: &AdvisoryResult) {
    assert!(result.is_safe);
    assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);
    assert!(
        result.suggestions.is_empty(),
        "unexpected suggestions: {:?}",
        result.suggestions
    );
    assert!(result.approval_message.is_none());
}
