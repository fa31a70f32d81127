use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    FoodLogEntry, FoodLogQuery, FoodLogRequest, FoodLogView, ProfileId, ProfileSubmission,
    ProfileUpdate, UserProfile,
};
use super::intake::{IntakeGuard, ProfileViolation};
use super::repository::{ProfileRepository, RepositoryError};
use crate::advisory::AdvisoryEngine;
use crate::nutrition::{advise_food, FoodAdvice, NutritionCatalog, NutritionFacts};

/// Service composing the intake guard, repository, catalog, and advisory engine.
pub struct ProfileService<R> {
    guard: IntakeGuard,
    repository: Arc<R>,
    catalog: Arc<NutritionCatalog>,
    engine: Arc<AdvisoryEngine>,
}

static PROFILE_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static LOG_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_profile_id() -> ProfileId {
    let id = PROFILE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("usr-{id:06}"))
}

fn next_log_id() -> u64 {
    LOG_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl<R> ProfileService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(
        repository: Arc<R>,
        catalog: Arc<NutritionCatalog>,
        engine: Arc<AdvisoryEngine>,
    ) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            catalog,
            engine,
        }
    }

    /// Validate and store a new profile.
    pub fn register(
        &self,
        submission: ProfileSubmission,
    ) -> Result<UserProfile, ProfileServiceError> {
        self.guard.check_submission(&submission)?;
        let profile = UserProfile::from_submission(next_profile_id(), submission, Utc::now());
        let stored = self.repository.insert(profile)?;
        info!(profile_id = %stored.id.0, "profile registered");
        Ok(stored)
    }

    pub fn get(&self, id: &ProfileId) -> Result<UserProfile, ProfileServiceError> {
        let profile = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    /// Apply the provided fields and re-run the intake checks before persisting.
    pub fn update(
        &self,
        id: &ProfileId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ProfileServiceError> {
        let mut profile = self.get(id)?;
        profile.apply(update, Utc::now());
        self.guard.check_profile(&profile)?;
        self.repository.update(profile.clone())?;
        Ok(profile)
    }

    /// Remove a profile along with its food logs.
    pub fn delete(&self, id: &ProfileId) -> Result<(), ProfileServiceError> {
        self.repository.remove(id)?;
        info!(profile_id = %id.0, "profile deleted");
        Ok(())
    }

    pub fn log_food(
        &self,
        id: &ProfileId,
        request: FoodLogRequest,
    ) -> Result<FoodLogView, ProfileServiceError> {
        let profile = self.get(id)?;

        let record = self
            .catalog
            .get(request.food_id)
            .ok_or(ProfileServiceError::UnknownFood {
                food_id: request.food_id.0,
            })?;

        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(ProfileServiceError::InvalidServing(request.amount));
        }

        let entry = FoodLogEntry {
            id: next_log_id(),
            profile_id: profile.id,
            food_id: request.food_id,
            meal_type: request.meal_type,
            amount: request.amount,
            logged_on: request
                .logged_on
                .unwrap_or_else(|| Utc::now().date_naive()),
        };
        let stored = self.repository.append_log(entry)?;

        Ok(FoodLogView {
            id: stored.id,
            logged_on: stored.logged_on,
            meal_type: stored.meal_type,
            amount: stored.amount,
            food: NutritionFacts::from_record(record),
        })
    }

    pub fn food_logs(
        &self,
        id: &ProfileId,
        query: &FoodLogQuery,
    ) -> Result<Vec<FoodLogView>, ProfileServiceError> {
        self.get(id)?;
        let entries = self.repository.logs(id, query)?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let record = self.catalog.get(entry.food_id)?;
                Some(FoodLogView {
                    id: entry.id,
                    logged_on: entry.logged_on,
                    meal_type: entry.meal_type,
                    amount: entry.amount,
                    food: NutritionFacts::from_record(record),
                })
            })
            .collect())
    }

    /// Evaluate `food` against the stored profile's conditions and goals.
    pub fn advise(&self, id: &ProfileId, food: &str) -> Result<FoodAdvice, ProfileServiceError> {
        let profile = self.get(id)?;
        Ok(advise_food(
            &self.catalog,
            &self.engine,
            food,
            &profile.health_profile(),
        ))
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Intake(#[from] ProfileViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("food item {food_id} not found in the catalog")]
    UnknownFood { food_id: u32 },
    #[error("serving amount must be positive (found {0})")]
    InvalidServing(f32),
}
