//! Nutrition table lookup and the food endpoints built on top of it.

pub mod advice;
mod catalog;
pub mod domain;
mod parser;
pub mod router;
mod summary;

#[cfg(test)]
mod tests;

pub use advice::{advise_food, FoodAdvice};
pub use catalog::{CatalogError, CatalogLookupError, NutritionCatalog};
pub use domain::{FoodId, FoodRecord, NutritionFacts, FOOD_CLASSES};
pub use router::{food_router, FoodAdviceRequest, FoodState};
pub use summary::food_summary;
