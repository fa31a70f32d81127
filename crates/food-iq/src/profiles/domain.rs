use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::{split_tokens, ConditionSet, GoalSet, HealthProfile};
use crate::nutrition::{FoodId, NutritionFacts};

/// Identifier wrapper for registered profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

/// Direction a user wants their body weight to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    Gain,
    Maintain,
    Lose,
}

/// Registration payload. Free-text health columns are stored as supplied and
/// only normalized when an advisory is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub email: String,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub weight_kg: f32,
    pub height_cm: f32,
    #[serde(default)]
    pub health_issues: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    #[serde(default)]
    pub dietary_goals: Option<String>,
    #[serde(default)]
    pub weight_goal: Option<WeightGoal>,
    #[serde(default)]
    pub calorie_target: Option<u32>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub phone_number: Option<String>,
    pub weight_kg: Option<f32>,
    pub height_cm: Option<f32>,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub dietary_preferences: Option<String>,
    pub dietary_goals: Option<String>,
    pub weight_goal: Option<WeightGoal>,
    pub calorie_target: Option<u32>,
}

/// Stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileId,
    pub email: String,
    pub name: String,
    pub age: u8,
    pub phone_number: Option<String>,
    pub weight_kg: f32,
    pub height_cm: f32,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub dietary_preferences: Option<String>,
    pub dietary_goals: Option<String>,
    pub weight_goal: Option<WeightGoal>,
    pub calorie_target: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn from_submission(id: ProfileId, submission: ProfileSubmission, now: DateTime<Utc>) -> Self {
        let ProfileSubmission {
            email,
            name,
            age,
            phone_number,
            weight_kg,
            height_cm,
            health_issues,
            allergies,
            dietary_preferences,
            dietary_goals,
            weight_goal,
            calorie_target,
        } = submission;

        Self {
            id,
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            age,
            phone_number,
            weight_kg,
            height_cm,
            health_issues,
            allergies,
            dietary_preferences,
            dietary_goals,
            weight_goal,
            calorie_target,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: ProfileUpdate, now: DateTime<Utc>) {
        let ProfileUpdate {
            name,
            age,
            phone_number,
            weight_kg,
            height_cm,
            health_issues,
            allergies,
            dietary_preferences,
            dietary_goals,
            weight_goal,
            calorie_target,
        } = update;

        if let Some(name) = name {
            self.name = name.trim().to_string();
        }
        if let Some(age) = age {
            self.age = age;
        }
        if phone_number.is_some() {
            self.phone_number = phone_number;
        }
        if let Some(weight_kg) = weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(height_cm) = height_cm {
            self.height_cm = height_cm;
        }
        if health_issues.is_some() {
            self.health_issues = health_issues;
        }
        if allergies.is_some() {
            self.allergies = allergies;
        }
        if dietary_preferences.is_some() {
            self.dietary_preferences = dietary_preferences;
        }
        if dietary_goals.is_some() {
            self.dietary_goals = dietary_goals;
        }
        if weight_goal.is_some() {
            self.weight_goal = weight_goal;
        }
        if calorie_target.is_some() {
            self.calorie_target = calorie_target;
        }
        self.updated_at = now;
    }

    /// Conditions come from `health_issues`, goals from `dietary_goals`; a
    /// `lose` weight goal also counts as the `weight loss` goal.
    pub fn health_profile(&self) -> HealthProfile {
        let conditions = self
            .health_issues
            .as_deref()
            .map(split_tokens)
            .unwrap_or_default();

        let mut goals = self
            .dietary_goals
            .as_deref()
            .map(split_tokens)
            .unwrap_or_default();
        if self.weight_goal == Some(WeightGoal::Lose) {
            goals.push("weight loss".to_string());
        }

        HealthProfile::new(ConditionSet::from_raw(conditions), GoalSet::from_raw(goals))
    }
}

/// Meal slot a food log entry belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Other,
}

/// Request body for logging a food against a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogRequest {
    pub food_id: FoodId,
    #[serde(default)]
    pub meal_type: MealType,
    #[serde(default = "default_serving")]
    pub amount: f32,
    #[serde(default)]
    pub logged_on: Option<NaiveDate>,
}

fn default_serving() -> f32 {
    1.0
}

/// Persisted food log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: u64,
    pub profile_id: ProfileId,
    pub food_id: FoodId,
    pub meal_type: MealType,
    pub amount: f32,
    pub logged_on: NaiveDate,
}

/// Filter and pagination for log listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodLogQuery {
    pub skip: usize,
    pub limit: usize,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Default for FoodLogQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            date_from: None,
            date_to: None,
        }
    }
}

impl FoodLogQuery {
    pub fn includes(&self, date: NaiveDate) -> bool {
        self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }
}

/// Log entry joined with the catalog row it points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodLogView {
    pub id: u64,
    pub logged_on: NaiveDate,
    pub meal_type: MealType,
    pub amount: f32,
    pub food: NutritionFacts,
}
