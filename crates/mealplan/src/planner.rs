use macroplan_recipe::{CandidateQuery, DietSelection, RecipeRepository};
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, macros::format_description};
use validator::{Validate, ValidationError};

use crate::{
    Assembler, Assembly, GenerateError, IngredientLine, MEALS_PER_EVENT, MealCount, MealEvent,
    MealLabel, PlanEntry, PlanSink, PlannerSettings, ScaledMeal, ShoppingLine, cap_by_calories,
    collect_ingredients, select_candidates, shopping_list,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    pub diet: DietSelection,
    /// Daily calorie goal.
    #[validate(
        range(exclusive_min = 0.0, max = 20000.0),
        custom(function = "validate_finite")
    )]
    pub calories: f64,
    /// Upper bound in whole minutes for both prep and cook time of every dish.
    #[validate(range(min = 1, max = 1440))]
    pub time: u32,
    pub meal_count: MealCount,
    #[validate(length(min = 1, max = 64))]
    pub user_id: Option<String>,
    #[validate(custom(function = "validate_date"))]
    pub date: Option<String>,
}

fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite").with_message("expected a finite number".into()));
    }

    Ok(())
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    if parse_date(value).is_none() {
        return Err(ValidationError::new("date").with_message("expected YYYY-MM-DD".into()));
    }

    Ok(())
}

impl GenerateInput {
    /// Day the plan is stored under, today in UTC unless given.
    pub fn plan_date(&self) -> Date {
        self.date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTotals {
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(flatten)]
    pub meal: ScaledMeal,
    pub ingredients: Vec<IngredientLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealGroup {
    pub label: MealLabel,
    pub total_calories: i64,
    pub meals: Vec<PlannedMeal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub target_per_meal: f64,
    pub totals: MacroTotals,
    pub groups: Vec<MealGroup>,
    pub shopping_list: Vec<ShoppingLine>,
    pub attempts: u32,
}

#[derive(Debug, Clone)]
pub struct Planner {
    settings: PlannerSettings,
}

impl Planner {
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    fn assembler(&self) -> Assembler {
        Assembler {
            calorie_margin: self.settings.calorie_margin,
            max_attempts: self.settings.max_attempts,
        }
    }

    /// Runs one filter, assemble, aggregate and persist pass.
    ///
    /// The plan is only stored when the input carries a user id. A failing
    /// write is logged and the plan is still returned.
    #[tracing::instrument(
        skip_all,
        fields(diet = ?input.diet, calories = input.calories, meal_count = input.meal_count.events())
    )]
    pub async fn generate<S, R>(
        &self,
        store: &mut S,
        input: &GenerateInput,
        rng: &mut R,
    ) -> Result<MealPlan, GenerateError>
    where
        S: RecipeRepository + PlanSink + ?Sized,
        R: Rng + Send + ?Sized,
    {
        input.validate()?;

        let meal_count = input.meal_count;
        let target_per_meal = input.calories / meal_count.events() as f64;
        let time = i64::from(input.time);
        let query = CandidateQuery {
            diets: input.diet.expand(&self.settings.anything_diets),
            max_prep_time: time,
            max_cook_time: time,
        };

        let recipes = store.find_candidates(&query).await?;
        let candidates = select_candidates(&recipes, &query);

        let required = self.settings.min_candidates.max(meal_count.dishes());
        if candidates.len() < required {
            tracing::warn!(
                found = candidates.len(),
                required,
                diets = ?query.diets,
                "insufficient candidates"
            );

            return Err(GenerateError::InsufficientCandidates {
                found: candidates.len(),
                required,
            });
        }

        let candidates = cap_by_calories(
            candidates,
            target_per_meal / MEALS_PER_EVENT as f64,
            meal_count.dishes(),
        );

        let (events, attempts) =
            match self
                .assembler()
                .assemble(&candidates, meal_count, target_per_meal, rng)
            {
                Assembly::Accepted { events, attempts } => (events, attempts),
                Assembly::Exhausted { attempts } => {
                    tracing::warn!(attempts, pool = candidates.len(), "calorie goals not met");

                    return Err(GenerateError::ConstraintUnsatisfiable { attempts });
                }
            };

        let meals = events
            .iter()
            .flat_map(|event| event.meals.iter())
            .collect::<Vec<_>>();

        let totals = MacroTotals {
            calories: meals.iter().map(|m| m.scaled_calories).sum::<f64>().round() as i64,
            protein: meals.iter().map(|m| m.scaled_protein).sum::<f64>().round() as i64,
            fat: meals.iter().map(|m| m.scaled_fat).sum::<f64>().round() as i64,
            carbs: meals.iter().map(|m| m.scaled_carbs).sum::<f64>().round() as i64,
        };

        let mut ingredients = collect_ingredients(store, &meals).await?;
        let shopping_list = shopping_list(meals.iter().flat_map(|meal| {
            ingredients
                .get(&meal.candidate.id)
                .into_iter()
                .flatten()
                .map(move |line| (meal.candidate.id, line))
        }));

        if let Some(user_id) = &input.user_id {
            let entries = plan_entries(user_id, input.plan_date(), &events);

            if let Err(err) = store.save_plan(&entries).await {
                tracing::error!(user_id = %user_id, err = %err, "failed to save meal plan");
            }
        }

        let groups = events
            .into_iter()
            .map(|event| MealGroup {
                label: event.label,
                total_calories: event.total_calories().round() as i64,
                meals: event
                    .meals
                    .into_iter()
                    .map(|meal| PlannedMeal {
                        ingredients: ingredients.remove(&meal.candidate.id).unwrap_or_default(),
                        meal,
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        tracing::info!(attempts, target_per_meal, calories = totals.calories, "meal plan generated");

        Ok(MealPlan {
            target_per_meal,
            totals,
            groups,
            shopping_list,
            attempts,
        })
    }
}

fn plan_entries(user_id: &str, date: Date, events: &[MealEvent]) -> Vec<PlanEntry> {
    events
        .iter()
        .flat_map(|event| {
            event.meals.iter().map(|meal| PlanEntry {
                user_id: user_id.to_owned(),
                date: date.to_string(),
                meal_label: event.label.key(),
                recipe_id: meal.candidate.id,
                servings: i64::from(meal.servings),
                calories: meal.scaled_calories,
                protein: meal.scaled_protein,
                fat: meal.scaled_fat,
                carbs: meal.scaled_carbs,
            })
        })
        .collect()
}
