use macroplan_recipe::{CandidateQuery, DietTag, Recipe};
use serde::Serialize;

/// Recipe coerced to plain numbers for planning. Missing calories become NaN
/// so scaling treats the recipe as bad reference data, other macros become 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub diet: DietTag,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub prep_time: i64,
    pub cook_time: i64,
}

impl From<&Recipe> for Candidate {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.to_owned(),
            image: recipe.image.to_owned(),
            diet: recipe.diet.0,
            calories: recipe.calories.unwrap_or(f64::NAN),
            protein: recipe.protein.unwrap_or_default(),
            fat: recipe.fat.unwrap_or_default(),
            carbs: recipe.carbs.unwrap_or_default(),
            prep_time: recipe.prep_time.unwrap_or_default(),
            cook_time: recipe.cook_time.unwrap_or_default(),
        }
    }
}

/// Keeps the recipes matching `query`, in store order.
pub fn select_candidates(recipes: &[Recipe], query: &CandidateQuery) -> Vec<Candidate> {
    recipes
        .iter()
        .filter(|recipe| query.matches(recipe))
        .map(Candidate::from)
        .collect()
}

/// Drops candidates above `ceiling` calories per serving, unless that would
/// leave fewer than `needed`, in which case the pool is returned untouched.
pub fn cap_by_calories(candidates: Vec<Candidate>, ceiling: f64, needed: usize) -> Vec<Candidate> {
    let capped = candidates
        .iter()
        .filter(|candidate| candidate.calories <= ceiling)
        .cloned()
        .collect::<Vec<_>>();

    if capped.len() < needed {
        return candidates;
    }

    capped
}
