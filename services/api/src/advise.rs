use clap::Args;
use food_iq::advisory::{AdvisoryEngine, HealthProfile};
use food_iq::error::AppError;
use food_iq::nutrition::{advise_food, FoodAdvice, NutritionCatalog};
use std::fmt::{self, Write as _};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AdviseArgs {
    /// Food class to evaluate (e.g. samosa, kadai_paneer)
    #[arg(long)]
    pub(crate) food: String,
    /// Health condition; repeat for several
    #[arg(long)]
    pub(crate) condition: Vec<String>,
    /// Dietary goal; repeat for several
    #[arg(long)]
    pub(crate) goal: Vec<String>,
    /// Nutrition CSV to read instead of the bundled dataset
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the JSON payload the HTTP endpoint would return
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FoodsArgs {
    /// Nutrition CSV to read instead of the bundled dataset
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    let AdviseArgs {
        food,
        condition,
        goal,
        catalog,
        json,
    } = args;

    let catalog = NutritionCatalog::load(catalog.as_deref())?;
    let engine = AdvisoryEngine::standard();
    let goals = if goal.is_empty() { None } else { Some(goal) };
    let profile = HealthProfile::from_raw(condition, goals);
    let advice = advise_food(&catalog, &engine, &food, &profile);

    if json {
        match serde_json::to_string_pretty(&advice) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Advice payload unavailable: {err}"),
        }
    } else {
        match render_advice(&profile, &advice) {
            Ok(text) => print!("{text}"),
            Err(err) => println!("Advice output unavailable: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn run_foods(args: FoodsArgs) -> Result<(), AppError> {
    let catalog = NutritionCatalog::load(args.catalog.as_deref())?;
    let engine = AdvisoryEngine::standard();

    println!("Nutrition catalog ({} foods, * = has advice rules)", catalog.len());
    for record in catalog.all() {
        let marker = if engine.covers(&record.food_product) {
            '*'
        } else {
            ' '
        };
        match &record.food_group {
            Some(group) => println!(
                "  {:>3} {marker} {} ({group})",
                record.id.0, record.food_product
            ),
            None => println!("  {:>3} {marker} {}", record.id.0, record.food_product),
        }
    }

    Ok(())
}

pub(crate) fn render_advice(
    profile: &HealthProfile,
    advice: &FoodAdvice,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Food: {}", advice.food)?;
    if !profile.conditions.is_empty() {
        writeln!(out, "Conditions: {}", join(profile.conditions.iter()))?;
    }
    if !profile.goals.is_empty() {
        writeln!(out, "Goals: {}", join(profile.goals.iter()))?;
    }

    match &advice.summary {
        Some(summary) => writeln!(out, "{summary}")?,
        None => writeln!(out, "No nutrition data in the catalog for this food.")?,
    }

    let recommendations = &advice.recommendations;
    if recommendations.is_empty() {
        writeln!(out, "\nNo specific advice for this food.")?;
        return Ok(out);
    }

    if !recommendations.warnings.is_empty() {
        writeln!(out, "\nWarnings")?;
        for warning in &recommendations.warnings {
            writeln!(out, "- {warning}")?;
        }
    }

    if !recommendations.suggestions.is_empty() {
        writeln!(out, "\nSuggestions")?;
        for suggestion in &recommendations.suggestions {
            writeln!(out, "- {suggestion}")?;
        }
    }

    if let Some(message) = &recommendations.approval_message {
        writeln!(out, "\nApproved: {message}")?;
    }

    Ok(out)
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_for(food: &str, conditions: &[&str], goals: &[&str]) -> String {
        let catalog = NutritionCatalog::bundled().expect("bundled catalog parses");
        let goals = (!goals.is_empty()).then(|| goals.to_vec());
        let profile = HealthProfile::from_raw(conditions.iter().copied(), goals);
        let advice = advise_food(&catalog, &AdvisoryEngine::standard(), food, &profile);
        render_advice(&profile, &advice).expect("advice renders")
    }

    #[test]
    fn render_lists_warnings_and_suggestions() {
        let rendered = render_for("samosa", &["obesity"], &[]);

        assert!(rendered.starts_with(
            "Food: samosa\nConditions: obesity\nYour meal, samosa, consists of 308 kcal"
        ));
        assert!(rendered.contains("\nWarnings\n- This is deep-fried and high in saturated fats.\n"));
        assert!(rendered.contains("\nSuggestions\n"));
        assert!(!rendered.contains("Approved:"));
    }

    #[test]
    fn render_shows_approval_only_advice() {
        let rendered = render_for("dhokla", &[], &[]);

        assert!(!rendered.contains("Warnings"));
        assert!(!rendered.contains("Conditions:"));
        assert!(rendered.contains("Approved: Dhokla is a healthy snack."));
    }

    #[test]
    fn render_handles_unknown_food() {
        let rendered = render_for("pizza", &["diabetes"], &[]);

        assert!(rendered.contains("No nutrition data in the catalog for this food."));
        assert!(rendered.ends_with("No specific advice for this food.\n"));
    }

    #[test]
    fn render_echoes_normalized_conditions_and_goals() {
        let conditions = ["[\"high-bp\"", "'diabetes'", "none"];
        let rendered = render_for("kadai_paneer", &conditions, &["weight_loss"]);

        assert!(rendered.starts_with(
            "Food: kadai_paneer\nConditions: diabetes, high-bp\nGoals: weight_loss\n"
        ));
    }
}
