use sqlx::prelude::FromRow;

use crate::DietTag;

/// Recipe as stored. Nutrition and timing columns are nullable because they
/// come from external data management and are not guaranteed to be filled.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub servings: Option<i64>,
    pub diet: sqlx::types::Text<DietTag>,
    pub image: Option<String>,
    pub health_score: Option<f64>,
    pub cost: Option<f64>,
    pub allergies: Option<String>,
}

/// One ingredient line of a recipe, per serving batch.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct IngredientQuantity {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub quantity: f64,
    pub unit: String,
}

/// Criteria a recipe must satisfy to be considered for a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub diets: Vec<DietTag>,
    pub max_prep_time: i64,
    pub max_cook_time: i64,
}

impl CandidateQuery {
    /// Recipes without a stored prep or cook time never match.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.diets.contains(&recipe.diet.0)
            && recipe
                .prep_time
                .is_some_and(|prep_time| prep_time <= self.max_prep_time)
            && recipe
                .cook_time
                .is_some_and(|cook_time| cook_time <= self.max_cook_time)
    }
}
