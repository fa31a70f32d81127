use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::domain::{FoodId, FoodRecord};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<FoodRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<NutritionRow>() {
        let row = row?;
        if row.food_product.is_empty() {
            continue;
        }

        let id = FoodId(records.len() as u32 + 1);
        records.push(row.into_record(id));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct NutritionRow {
    #[serde(rename = "Food Product")]
    food_product: String,
    #[serde(rename = "Amount (g)", default, deserialize_with = "optional_number")]
    amount: Option<f64>,
    #[serde(rename = "Energy (kcal)", default, deserialize_with = "optional_number")]
    energy: Option<f64>,
    #[serde(
        rename = "Carbohydrate (g)",
        default,
        deserialize_with = "optional_number"
    )]
    carbohydrate: Option<f64>,
    #[serde(rename = "Protein (g)", default, deserialize_with = "optional_number")]
    protein: Option<f64>,
    #[serde(rename = "Total Fat (g)", default, deserialize_with = "optional_number")]
    total_fat: Option<f64>,
    #[serde(rename = "Sodium (mg)", default, deserialize_with = "optional_number")]
    sodium: Option<f64>,
    #[serde(rename = "Iron (mg)", default, deserialize_with = "optional_number")]
    iron: Option<f64>,
    #[serde(rename = "Sugar (g)", default, deserialize_with = "optional_number")]
    sugar: Option<f64>,
    #[serde(rename = "Fiber (g)", default, deserialize_with = "optional_number")]
    fiber: Option<f64>,
    #[serde(rename = "Food Group", default, deserialize_with = "empty_string_as_none")]
    food_group: Option<String>,
}

impl NutritionRow {
    fn into_record(self, id: FoodId) -> FoodRecord {
        FoodRecord {
            id,
            food_product: self.food_product,
            amount: self.amount,
            energy: self.energy,
            carbohydrate: self.carbohydrate,
            protein: self.protein,
            total_fat: self.total_fat,
            sodium: self.sodium,
            iron: self.iron,
            sugar: self.sugar,
            fiber: self.fiber,
            food_group: self.food_group,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Spreadsheet exports leave blanks and `NaN` in sparse columns.
fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = empty_string_as_none(deserializer)? else {
        return Ok(None);
    };

    if raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("invalid number '{raw}': {err}")))
}
