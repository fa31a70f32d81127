use super::domain::NutritionFacts;

/// Plain-language sentence describing a meal's headline nutrients.
///
/// `name` is echoed as the caller supplied it. Missing and zero values are
/// left out of the sentence.
pub fn food_summary(name: &str, facts: &NutritionFacts) -> String {
    let parts: Vec<String> = [
        (facts.energy, " kcal of energy"),
        (facts.carbohydrate, "g of carbohydrates"),
        (facts.protein, "g of protein"),
        (facts.total_fat, "g of total fat"),
        (facts.sodium, "mg of sodium"),
        (facts.iron, "mg of iron"),
    ]
    .into_iter()
    .filter_map(|(value, label)| {
        value
            .filter(|value| *value != 0.0)
            .map(|value| format!("{}{label}", format_quantity(value)))
    })
    .collect();

    if parts.is_empty() {
        format!("Your meal, {name}, consists of minimal nutritional data available.")
    } else {
        format!("Your meal, {name}, consists of {}.", parts.join(", "))
    }
}

/// At most two decimals, trailing zeros dropped (`150`, `4.5`, `0.25`).
///
/// Whole values carry no fractional part at all: a catalog reading of
/// `160.0` is rendered as `160`, never `160.0`.
pub(crate) fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
