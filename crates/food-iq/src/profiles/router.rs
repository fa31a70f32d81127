use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{FoodLogQuery, FoodLogRequest, ProfileId, ProfileSubmission, ProfileUpdate};
use super::repository::{ProfileRepository, RepositoryError};
use super::service::{ProfileService, ProfileServiceError};

/// Router builder exposing profile, food log, and personalised advice endpoints.
pub fn profile_router<R>(service: Arc<ProfileService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/profiles", post(register_handler::<R>))
        .route(
            "/api/v1/profiles/:profile_id",
            get(profile_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/profiles/:profile_id/food-logs",
            get(food_logs_handler::<R>).post(log_food_handler::<R>),
        )
        .route(
            "/api/v1/profiles/:profile_id/advice/:food_name",
            get(advice_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    axum::Json(submission): axum::Json<ProfileSubmission>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.register(submission) {
        Ok(profile) => (StatusCode::CREATED, axum::Json(profile)).into_response(),
        Err(ProfileServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "a profile with this email already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.get(&ProfileId(profile_id)) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
    axum::Json(update): axum::Json<ProfileUpdate>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.update(&ProfileId(profile_id), update) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.delete(&ProfileId(profile_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn log_food_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
    axum::Json(request): axum::Json<FoodLogRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.log_food(&ProfileId(profile_id), request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn food_logs_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path(profile_id): Path<String>,
    Query(query): Query<FoodLogQuery>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.food_logs(&ProfileId(profile_id), &query) {
        Ok(logs) => (StatusCode::OK, axum::Json(json!({ "logs": logs }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advice_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Path((profile_id, food_name)): Path<(String, String)>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.advise(&ProfileId(profile_id), &food_name) {
        Ok(advice) => (StatusCode::OK, axum::Json(advice)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ProfileServiceError) -> Response {
    let status = match &error {
        ProfileServiceError::Intake(_) | ProfileServiceError::InvalidServing(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ProfileServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ProfileServiceError::UnknownFood { .. } => StatusCode::NOT_FOUND,
        ProfileServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ProfileServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
