use std::collections::BTreeSet;

use serde::Serialize;

use super::normalizer::normalize_tokens;

/// Normalized health conditions reported by a user (diabetes, high-bp, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConditionSet(BTreeSet<String>);

impl ConditionSet {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(normalize_tokens(raw))
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.0.contains(condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Normalized dietary or fitness goals (weight loss, high protein, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GoalSet(BTreeSet<String>);

impl GoalSet {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(normalize_tokens(raw))
    }

    pub fn contains(&self, goal: &str) -> bool {
        self.0.contains(goal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The two lookup sets a single evaluation reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthProfile {
    pub conditions: ConditionSet,
    pub goals: GoalSet,
}

impl HealthProfile {
    pub fn new(conditions: ConditionSet, goals: GoalSet) -> Self {
        Self { conditions, goals }
    }

    /// Normalize both raw lists. A missing goal list is an empty set.
    pub fn from_raw<C, G, SC, SG>(conditions: C, goals: Option<G>) -> Self
    where
        C: IntoIterator<Item = SC>,
        G: IntoIterator<Item = SG>,
        SC: AsRef<str>,
        SG: AsRef<str>,
    {
        let goals = match goals {
            Some(goals) => GoalSet::from_raw(goals),
            None => GoalSet::default(),
        };

        Self {
            conditions: ConditionSet::from_raw(conditions),
            goals,
        }
    }
}
