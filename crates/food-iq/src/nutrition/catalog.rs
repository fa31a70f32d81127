use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::domain::{FoodId, FoodRecord};
use super::parser::parse_records;

const BUNDLED_NUTRITION_CSV: &str = include_str!("../../data/indian_food_nutrition.csv");

/// Failures while loading a nutrition table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open nutrition table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed nutrition table: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of a lookup that must resolve to exactly one food.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogLookupError {
    #[error("food item not found")]
    NotFound,
    #[error("multiple food items found ({matches}); please refine your search")]
    Ambiguous { matches: usize },
}

/// Read-only, in-memory nutrition table.
#[derive(Debug, Clone, Default)]
pub struct NutritionCatalog {
    records: Vec<FoodRecord>,
}

impl NutritionCatalog {
    /// The dataset shipped with the crate, one row per classifier label.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_reader(BUNDLED_NUTRITION_CSV.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records = parse_records(reader)?;
        debug!(foods = records.len(), "nutrition catalog loaded");
        Ok(Self { records })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load from `path` when given, otherwise the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Exact product name first, then the first case-insensitive substring match.
    pub fn lookup(&self, name: &str) -> Option<&FoodRecord> {
        if let Some(exact) = self
            .records
            .iter()
            .find(|record| record.food_product == name)
        {
            debug!(food = name, "exact catalog match");
            return Some(exact);
        }

        let partial = self.partial_matches(name).next();
        debug!(food = name, found = partial.is_some(), "partial catalog match");
        partial
    }

    /// Case-insensitive substring match that must be unambiguous.
    pub fn find_unique(&self, name: &str) -> Result<&FoodRecord, CatalogLookupError> {
        let mut matches = self.partial_matches(name);
        let first = matches.next().ok_or(CatalogLookupError::NotFound)?;
        let others = matches.count();
        if others > 0 {
            return Err(CatalogLookupError::Ambiguous {
                matches: others + 1,
            });
        }
        Ok(first)
    }

    fn partial_matches<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a FoodRecord> + 'a {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .filter(move |record| record.food_product.to_lowercase().contains(&needle))
    }
}
