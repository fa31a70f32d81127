use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::advice::advise_food;
use super::catalog::{CatalogLookupError, NutritionCatalog};
use super::domain::{NutritionFacts, FOOD_CLASSES};
use super::summary::food_summary;
use crate::advisory::{AdvisoryEngine, HealthProfile};

/// Shared handles for the food endpoints.
#[derive(Clone)]
pub struct FoodState {
    pub catalog: Arc<NutritionCatalog>,
    pub engine: Arc<AdvisoryEngine>,
}

impl FoodState {
    pub fn new(catalog: Arc<NutritionCatalog>, engine: Arc<AdvisoryEngine>) -> Self {
        Self { catalog, engine }
    }
}

/// Ad-hoc advice request; conditions and goals arrive as raw tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodAdviceRequest {
    pub food: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

/// Router builder exposing nutrition lookup and advisory endpoints.
pub fn food_router(state: FoodState) -> Router {
    Router::new()
        .route("/api/v1/food/summary/:food_name", get(summary_handler))
        .route("/api/v1/food/all", get(all_foods_handler))
        .route("/api/v1/food/classes", get(food_classes_handler))
        .route("/api/v1/food/advice", post(advice_handler))
        .with_state(state)
}

pub(crate) async fn summary_handler(
    State(state): State<FoodState>,
    Path(food_name): Path<String>,
) -> Response {
    match state.catalog.find_unique(&food_name) {
        Ok(record) => {
            let facts = NutritionFacts::from_record(record);
            let payload = json!({ "summary": food_summary(&food_name, &facts) });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error @ CatalogLookupError::NotFound) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error @ CatalogLookupError::Ambiguous { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn all_foods_handler(State(state): State<FoodState>) -> Response {
    if state.catalog.is_empty() {
        let payload = json!({ "error": "no food items found in the catalog" });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }

    let foods: Vec<NutritionFacts> = state
        .catalog
        .all()
        .iter()
        .map(NutritionFacts::from_record)
        .collect();
    (StatusCode::OK, axum::Json(json!({ "foods": foods }))).into_response()
}

pub(crate) async fn food_classes_handler() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "food_classes": FOOD_CLASSES }))
}

pub(crate) async fn advice_handler(
    State(state): State<FoodState>,
    axum::Json(request): axum::Json<FoodAdviceRequest>,
) -> Response {
    let FoodAdviceRequest {
        food,
        conditions,
        goals,
    } = request;

    if food.trim().is_empty() {
        let payload = json!({ "error": "food must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let profile = HealthProfile::from_raw(conditions, goals);
    let advice = advise_food(&state.catalog, &state.engine, &food, &profile);
    (StatusCode::OK, axum::Json(advice)).into_response()
}
