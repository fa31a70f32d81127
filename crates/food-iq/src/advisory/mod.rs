//! Rule-based food-safety advisories.
//!
//! A food identity plus a user's conditions and goals are run through a fixed
//! table of per-food rule groups. Every group sees every evaluation and
//! ignores foods it does not name; inside a group the first matching branch
//! wins. The result is a warnings/suggestions/approval snapshot that callers
//! merge with nutrition data.

mod normalizer;
mod profile;
pub mod rules;

#[cfg(test)]
mod tests;

pub use normalizer::{normalize_tokens, split_tokens};
pub use profile::{ConditionSet, GoalSet, HealthProfile};
pub use rules::{Branch, Effect, Guard, RuleGroup, RULE_TABLE};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Advisory emitted for one food and one user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryResult {
    /// No rule flips this today; kept so clients can rely on the key.
    pub is_safe: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub approval_message: Option<String>,
}

impl AdvisoryResult {
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.suggestions.is_empty() && self.approval_message.is_none()
    }
}

impl Default for AdvisoryResult {
    fn default() -> Self {
        Self {
            is_safe: true,
            warnings: Vec::new(),
            suggestions: Vec::new(),
            approval_message: None,
        }
    }
}

/// Per-evaluation scratch space written by rule effects.
#[derive(Debug, Default)]
pub(crate) struct AdvisoryAccumulator {
    warnings: Vec<String>,
    suggestions: Vec<String>,
    approval_message: Option<String>,
}

impl AdvisoryAccumulator {
    pub(crate) fn warn(&mut self, warning: &str) {
        self.warnings.push(warning.to_string());
    }

    pub(crate) fn suggest(&mut self, suggestion: &str) {
        self.suggestions.push(suggestion.to_string());
    }

    /// Single slot: a later approval replaces an earlier one.
    pub(crate) fn approve(&mut self, message: &str) {
        self.approval_message = Some(message.to_string());
    }

    fn finish(self) -> AdvisoryResult {
        AdvisoryResult {
            is_safe: true,
            warnings: self.warnings,
            suggestions: self.suggestions,
            approval_message: self.approval_message,
        }
    }
}

/// Stateless evaluator over a static rule table.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryEngine {
    rules: &'static [RuleGroup],
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl AdvisoryEngine {
    pub fn standard() -> Self {
        Self::with_rules(RULE_TABLE)
    }

    pub fn with_rules(rules: &'static [RuleGroup]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [RuleGroup] {
        self.rules
    }

    /// Whether any rule group names `food`.
    pub fn covers(&self, food: &str) -> bool {
        self.rules.iter().any(|group| group.applies_to(food))
    }

    /// Normalize the raw lists and evaluate. Never fails; foods no rule names
    /// produce an empty advisory.
    pub fn evaluate<C, G, SC, SG>(
        &self,
        food: &str,
        conditions: C,
        goals: Option<G>,
    ) -> AdvisoryResult
    where
        C: IntoIterator<Item = SC>,
        G: IntoIterator<Item = SG>,
        SC: AsRef<str>,
        SG: AsRef<str>,
    {
        let profile = HealthProfile::from_raw(conditions, goals);
        self.evaluate_profile(food, &profile)
    }

    pub fn evaluate_profile(&self, food: &str, profile: &HealthProfile) -> AdvisoryResult {
        let mut accumulator = AdvisoryAccumulator::default();

        for group in self.rules {
            group.evaluate(food, profile, &mut accumulator);
        }

        let result = accumulator.finish();
        info!(
            food,
            conditions = ?profile.conditions,
            goals = ?profile.goals,
            warnings = result.warnings.len(),
            suggestions = result.suggestions.len(),
            approved = result.approval_message.is_some(),
            "food advisory evaluated"
        );
        result
    }
}
