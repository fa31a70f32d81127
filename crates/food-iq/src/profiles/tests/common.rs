use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::advisory::AdvisoryEngine;
use crate::nutrition::{FoodId, NutritionCatalog};
use crate::profiles::domain::{
    FoodLogEntry, FoodLogQuery, FoodLogRequest, MealType, ProfileId, ProfileSubmission, UserProfile,
    WeightGoal,
};
use crate::profiles::repository::{ProfileRepository, RepositoryError};
use crate::profiles::{profile_router, ProfileService};

pub(super) const SAMOSA: FoodId = FoodId(25);
pub(super) const CHICKEN_TIKKA: FoodId = FoodId(7);

pub(super) fn submission(email: &str) -> ProfileSubmission {
    ProfileSubmission {
        email: email.to_string(),
        name: "Asha Rao".to_string(),
        age: 42,
        phone_number: Some("+91 98450 00000".to_string()),
        weight_kg: 78.5,
        height_cm: 162.0,
        health_issues: Some("diabetes, high-bp".to_string()),
        allergies: None,
        dietary_preferences: Some("vegetarian".to_string()),
        dietary_goals: Some("muscle gain".to_string()),
        weight_goal: Some(WeightGoal::Lose),
        calorie_target: Some(1800),
    }
}

pub(super) fn log_request(food_id: FoodId, year: i32, month: u32, day: u32) -> FoodLogRequest {
    FoodLogRequest {
        food_id,
        meal_type: MealType::Lunch,
        amount: 1.0,
        logged_on: Some(date(year, month, day)),
    }
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn catalog() -> Arc<NutritionCatalog> {
    Arc::new(NutritionCatalog::bundled().expect("bundled catalog parses"))
}

pub(super) fn build_service() -> (ProfileService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ProfileService::new(
        repository.clone(),
        catalog(),
        Arc::new(AdvisoryEngine::standard()),
    );
    (service, repository)
}

pub(super) fn service_with<R: ProfileRepository + 'static>(repository: R) -> ProfileService<R> {
    ProfileService::new(
        Arc::new(repository),
        catalog(),
        Arc::new(AdvisoryEngine::standard()),
    )
}

pub(super) fn profile_router_with_service(
    service: ProfileService<MemoryRepository>,
) -> axum::Router {
    profile_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) profiles: Arc<Mutex<HashMap<ProfileId, UserProfile>>>,
    pub(super) logs: Arc<Mutex<Vec<FoodLogEntry>>>,
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, profile: UserProfile) -> Result<UserProfile, RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        if guard
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&profile.email))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        match guard.get_mut(&profile.id) {
            Some(slot) => {
                *slot = profile;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ProfileId) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        guard.remove(id).ok_or(RepositoryError::NotFound)?;
        self.logs
            .lock()
            .expect("log mutex poisoned")
            .retain(|entry| &entry.profile_id != id);
        Ok(())
    }

    fn append_log(&self, entry: FoodLogEntry) -> Result<FoodLogEntry, RepositoryError> {
        self.logs
            .lock()
            .expect("log mutex poisoned")
            .push(entry.clone());
        Ok(entry)
    }

    fn logs(
        &self,
        id: &ProfileId,
        query: &FoodLogQuery,
    ) -> Result<Vec<FoodLogEntry>, RepositoryError> {
        let guard = self.logs.lock().expect("log mutex poisoned");
        let mut entries: Vec<FoodLogEntry> = guard
            .iter()
            .filter(|entry| &entry.profile_id == id && query.includes(entry.logged_on))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.logged_on.cmp(&a.logged_on).then(b.id.cmp(&a.id)));
        Ok(entries
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _profile: UserProfile) -> Result<UserProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _profile: UserProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<UserProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &ProfileId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn append_log(&self, _entry: FoodLogEntry) -> Result<FoodLogEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn logs(
        &self,
        _id: &ProfileId,
        _query: &FoodLogQuery,
    ) -> Result<Vec<FoodLogEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
