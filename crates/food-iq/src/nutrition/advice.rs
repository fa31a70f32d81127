use serde::{Deserialize, Serialize};

use super::catalog::NutritionCatalog;
use super::domain::NutritionFacts;
use super::summary::food_summary;
use crate::advisory::{AdvisoryEngine, AdvisoryResult, HealthProfile};

/// Food summary response: catalog nutrition merged with the rule advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAdvice {
    pub food: String,
    pub nutrition: Option<NutritionFacts>,
    pub summary: Option<String>,
    pub recommendations: AdvisoryResult,
}

/// Look the food up (exact, then partial) and evaluate it for `profile`.
///
/// A food missing from the catalog still gets its advisory; nutrition and
/// summary are simply absent.
pub fn advise_food(
    catalog: &NutritionCatalog,
    engine: &AdvisoryEngine,
    food: &str,
    profile: &HealthProfile,
) -> FoodAdvice {
    let nutrition = catalog.lookup(food).map(NutritionFacts::from_record);
    let summary = nutrition.as_ref().map(|facts| food_summary(food, facts));
    let recommendations = engine.evaluate_profile(food, profile);

    FoodAdvice {
        food: food.to_string(),
        nutrition,
        summary,
        recommendations,
    }
}
