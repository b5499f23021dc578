use serde::Serialize;

use crate::Candidate;

/// A candidate with an integer serving count and the macros that count yields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledMeal {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub servings: u32,
    pub scaled_calories: f64,
    pub scaled_protein: f64,
    pub scaled_fat: f64,
    pub scaled_carbs: f64,
}

/// Picks the whole number of servings whose calories land closest to
/// `target`, never fewer than one.
///
/// Candidates with non-finite or non-positive calories get one serving and
/// zeroed macros.
pub fn scale_to_target(candidate: &Candidate, target: f64) -> ScaledMeal {
    if !candidate.calories.is_finite() || candidate.calories <= 0.0 {
        return ScaledMeal {
            candidate: candidate.clone(),
            servings: 1,
            scaled_calories: 0.0,
            scaled_protein: 0.0,
            scaled_fat: 0.0,
            scaled_carbs: 0.0,
        };
    }

    let servings = (target / candidate.calories).round().max(1.0) as u32;
    let factor = f64::from(servings);

    ScaledMeal {
        candidate: candidate.clone(),
        servings,
        scaled_calories: factor * candidate.calories,
        scaled_protein: factor * candidate.protein,
        scaled_fat: factor * candidate.fat,
        scaled_carbs: factor * candidate.carbs,
    }
}
