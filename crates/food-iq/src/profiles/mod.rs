//! User profiles, food logs, and advice personalised from a stored profile.

pub mod domain;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    FoodLogEntry, FoodLogQuery, FoodLogRequest, FoodLogView, MealType, ProfileId,
    ProfileSubmission, ProfileUpdate, UserProfile, WeightGoal,
};
pub use intake::ProfileViolation;
pub use repository::{ProfileRepository, RepositoryError};
pub use router::profile_router;
pub use service::{ProfileService, ProfileServiceError};
