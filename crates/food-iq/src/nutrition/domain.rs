use serde::{Deserialize, Serialize};

/// Dish identities the image classifier is trained to emit, in label order.
pub const FOOD_CLASSES: [&str; 25] = [
    "aloo_matar",
    "appam",
    "bhindi_masala",
    "biryani",
    "butter_chicken",
    "chapati",
    "chicken_tikka",
    "chole_bhature",
    "daal_baati_churma",
    "daal_puri",
    "dal_makhani",
    "dhokla",
    "gulab_jamun",
    "idli",
    "jalebi",
    "kaathi_rolls",
    "kadai_paneer",
    "masala_dosa",
    "mysore_pak",
    "pakode",
    "palak_paneer",
    "paneer_butter_masala",
    "paani_puri",
    "pav_bhaji",
    "samosa",
];

/// Catalog-assigned identifier, stable for the lifetime of a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u32);

/// One row of the nutrition table, values per `amount` grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub food_product: String,
    pub amount: Option<f64>,
    pub energy: Option<f64>,
    pub carbohydrate: Option<f64>,
    pub protein: Option<f64>,
    pub total_fat: Option<f64>,
    pub sodium: Option<f64>,
    pub iron: Option<f64>,
    pub sugar: Option<f64>,
    pub fiber: Option<f64>,
    pub food_group: Option<String>,
}

/// JSON-safe projection of a record: rounded to two decimals, no NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub id: FoodId,
    pub food_product: String,
    pub amount: Option<f64>,
    pub energy: Option<f64>,
    pub carbohydrate: Option<f64>,
    pub protein: Option<f64>,
    pub total_fat: Option<f64>,
    pub sodium: Option<f64>,
    pub iron: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_group: Option<String>,
}

impl NutritionFacts {
    pub fn from_record(record: &FoodRecord) -> Self {
        Self {
            id: record.id,
            food_product: record.food_product.clone(),
            amount: json_safe(record.amount),
            energy: json_safe(record.energy),
            carbohydrate: json_safe(record.carbohydrate),
            protein: json_safe(record.protein),
            total_fat: json_safe(record.total_fat),
            sodium: json_safe(record.sodium),
            iron: json_safe(record.iron),
            sugar: json_safe(record.sugar),
            fiber: json_safe(record.fiber),
            food_group: record.food_group.clone(),
        }
    }
}

impl From<&FoodRecord> for NutritionFacts {
    fn from(record: &FoodRecord) -> Self {
        Self::from_record(record)
    }
}

pub(crate) fn json_safe(value: Option<f64>) -> Option<f64> {
    value
        .filter(|value| value.is_finite())
        .map(|value| (value * 100.0).round() / 100.0)
}
