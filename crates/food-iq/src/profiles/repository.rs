use super::domain::{FoodLogEntry, FoodLogQuery, ProfileId, UserProfile};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations enforce email uniqueness on insert and drop a profile's
/// food logs when the profile is removed.
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, profile: UserProfile) -> Result<UserProfile, RepositoryError>;
    fn update(&self, profile: UserProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProfileId) -> Result<Option<UserProfile>, RepositoryError>;
    fn remove(&self, id: &ProfileId) -> Result<(), RepositoryError>;
    fn append_log(&self, entry: FoodLogEntry) -> Result<FoodLogEntry, RepositoryError>;
    /// Entries for `id` inside the query's date window, newest first, paginated.
    fn logs(&self, id: &ProfileId, query: &FoodLogQuery)
        -> Result<Vec<FoodLogEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
