use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::advisory::AdvisoryEngine;
use crate::nutrition::{food_router, FoodState, NutritionCatalog};

pub(super) const SAMPLE_CSV: &str = "\
Food Product,Amount (g),Energy (kcal),Carbohydrate (g),Protein (g),Total Fat (g),Sodium (mg),Iron (mg)
samosa,100,308,32.2,5.3,17.7,423,1.8
kadai_paneer,100,186,6.3,9.2,14.1,366,0.8
palak_paneer,100,143,5.4,8.0,10.2,,NaN
plain water,250,0,0,0,0,,
";

pub(super) fn sample_catalog() -> NutritionCatalog {
    NutritionCatalog::from_reader(SAMPLE_CSV.as_bytes()).expect("sample csv parses")
}

pub(super) fn food_state(catalog: NutritionCatalog) -> FoodState {
    FoodState::new(Arc::new(catalog), Arc::new(AdvisoryEngine::standard()))
}

pub(super) fn router_with(catalog: NutritionCatalog) -> axum::Router {
    food_router(food_state(catalog))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
