use food_iq::profiles::{
    FoodLogEntry, FoodLogQuery, ProfileId, ProfileRepository, RepositoryError, UserProfile,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<ProfileId, UserProfile>>>,
    logs: Arc<Mutex<Vec<FoodLogEntry>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, profile: UserProfile) -> Result<UserProfile, RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        let email_taken = guard
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&profile.email));
        if email_taken || guard.contains_key(&profile.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        if guard.contains_key(&profile.id) {
            guard.insert(profile.id.clone(), profile);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ProfileId) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("repository mutex poisoned");
        guard.remove(id).ok_or(RepositoryError::NotFound)?;
        let mut logs = self.logs.lock().expect("log mutex poisoned");
        logs.retain(|entry| &entry.profile_id != id);
        Ok(())
    }

    fn append_log(&self, entry: FoodLogEntry) -> Result<FoodLogEntry, RepositoryError> {
        let mut guard = self.logs.lock().expect("log mutex poisoned");
        guard.push(entry.clone());
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
        entries.sort_by(|a, b| {
            b.logged_on
                .cmp(&a.logged_on)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }
}
