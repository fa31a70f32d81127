use super::domain::{ProfileSubmission, UserProfile};

/// Validation errors raised by the intake guard.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("name must not be empty")]
    MissingName,
    #[error("email address is not valid: {0:?}")]
    InvalidEmail(String),
    #[error("age must be between {min} and {max} (found {found})")]
    AgeOutOfRange { min: u8, max: u8, found: u8 },
    #[error("{field} must be a positive measurement (found {found})")]
    InvalidMeasurement { field: &'static str, found: f32 },
}

const MIN_AGE: u8 = 1;
const MAX_AGE: u8 = 120;

/// Guard applied to every profile before it reaches the repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn check_submission(&self, submission: &ProfileSubmission) -> Result<(), ProfileViolation> {
        check_fields(
            &submission.name,
            &submission.email,
            submission.age,
            submission.weight_kg,
            submission.height_cm,
        )
    }

    /// Re-run intake checks after an update has been applied.
    pub fn check_profile(&self, profile: &UserProfile) -> Result<(), ProfileViolation> {
        check_fields(
            &profile.name,
            &profile.email,
            profile.age,
            profile.weight_kg,
            profile.height_cm,
        )
    }
}

fn check_fields(
    name: &str,
    email: &str,
    age: u8,
    weight_kg: f32,
    height_cm: f32,
) -> Result<(), ProfileViolation> {
    if name.trim().is_empty() {
        return Err(ProfileViolation::MissingName);
    }

    let email = email.trim();
    let well_formed = email
        .split_once('@')
        .map_or(false, |(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(ProfileViolation::InvalidEmail(email.to_string()));
    }

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ProfileViolation::AgeOutOfRange {
            min: MIN_AGE,
            max: MAX_AGE,
            found: age,
        });
    }

    for (field, found) in [("weight_kg", weight_kg), ("height_cm", height_cm)] {
        if !found.is_finite() || found <= 0.0 {
            return Err(ProfileViolation::InvalidMeasurement { field, found });
        }
    }

    Ok(())
}
