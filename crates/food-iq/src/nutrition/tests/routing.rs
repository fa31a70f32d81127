use super::common::*;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::nutrition::router::{advice_handler, summary_handler};
use crate::nutrition::{FoodAdviceRequest, NutritionCatalog};

#[tokio::test]
async fn summary_handler_returns_sentence() {
    let response = summary_handler(
        State(food_state(sample_catalog())),
        Path("samosa".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body["summary"]
        .as_str()
        .expect("summary string")
        .starts_with("Your meal, samosa, consists of 308 kcal"));
}

#[tokio::test]
async fn summary_handler_maps_lookup_failures() {
    let missing = summary_handler(
        State(food_state(sample_catalog())),
        Path("dosa".to_string()),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let ambiguous = summary_handler(
        State(food_state(sample_catalog())),
        Path("paneer".to_string()),
    )
    .await;
    assert_eq!(ambiguous.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(ambiguous).await;
    assert!(body["error"]
        .as_str()
        .expect("error string")
        .contains("refine"));
}

#[tokio::test]
async fn all_route_lists_foods() {
    let response = router_with(sample_catalog())
        .oneshot(
            Request::get("/api/v1/food/all")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let foods = body["foods"].as_array().expect("foods array");
    assert_eq!(foods.len(), 4);
    assert_eq!(foods[0]["food_product"], "samosa");
    assert_eq!(foods[0]["id"], 1);
}

#[tokio::test]
async fn all_route_is_not_found_for_empty_catalog() {
    let response = router_with(NutritionCatalog::default())
        .oneshot(
            Request::get("/api/v1/food/all")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn classes_route_lists_classifier_labels() {
    let response = router_with(sample_catalog())
        .oneshot(
            Request::get("/api/v1/food/classes")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = read_json_body(response).await;
    let classes = body["food_classes"].as_array().expect("classes array");
    assert_eq!(classes.len(), 25);
    assert_eq!(classes[0], "aloo_matar");
}

#[tokio::test]
async fn advice_handler_merges_nutrition_and_advisory() {
    let request = FoodAdviceRequest {
        food: "samosa".to_string(),
        conditions: vec!["[\"obesity\"]".to_string()],
        goals: None,
    };

    let response = advice_handler(State(food_state(sample_catalog())), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["food"], "samosa");
    assert_eq!(body["nutrition"]["energy"], 308.0);
    assert_eq!(body["recommendations"]["is_safe"], true);
    assert_eq!(
        body["recommendations"]["warnings"]
            .as_array()
            .expect("warnings")
            .len(),
        2
    );
    assert_eq!(body["recommendations"]["approval_message"], json!(null));
}

#[tokio::test]
async fn advice_route_accepts_json_without_goals() {
    let response = router_with(sample_catalog())
        .oneshot(
            Request::post("/api/v1/food/advice")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({ "food": "aloo_matar", "conditions": ["gluten intolerance"] })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["nutrition"], json!(null));
    assert_eq!(body["summary"], json!(null));
    assert_eq!(
        body["recommendations"]["approval_message"],
        "Aloo Matar is naturally gluten-free and suitable for your condition."
    );
}

#[tokio::test]
async fn advice_handler_rejects_blank_food() {
    let request = FoodAdviceRequest {
        food: "  ".to_string(),
        conditions: Vec::new(),
        goals: None,
    };

    let response = advice_handler(State(food_state(sample_catalog())), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
