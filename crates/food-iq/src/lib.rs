//! Food IQ: nutrition lookup, rule-based food-safety advisories, and profile tracking.

pub mod advisory;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod profiles;
pub mod telemetry;
