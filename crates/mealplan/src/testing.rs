use std::collections::HashMap;

use macroplan_recipe::{CandidateQuery, DietTag, IngredientQuantity, Recipe, RecipeRepository};

use crate::{PlanEntry, PlanSink};

pub fn recipe(id: i64, diet: DietTag, calories: f64) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {id}"),
        calories: Some(calories),
        protein: Some(calories / 20.0),
        fat: Some(calories / 30.0),
        carbs: Some(calories / 15.0),
        prep_time: Some(5),
        cook_time: Some(5),
        servings: Some(2),
        diet: sqlx::types::Text(diet),
        image: None,
        health_score: None,
        cost: None,
        allergies: None,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub recipes: Vec<Recipe>,
    pub quantities: Vec<IngredientQuantity>,
    pub names: HashMap<i64, String>,
    pub queries: Vec<CandidateQuery>,
    pub saved: Vec<PlanEntry>,
    pub fail_saves: bool,
}

#[async_trait::async_trait]
impl RecipeRepository for MemoryStore {
    async fn find_candidates(&mut self, query: &CandidateQuery) -> anyhow::Result<Vec<Recipe>> {
        self.queries.push(query.clone());

        Ok(self
            .recipes
            .iter()
            .filter(|recipe| query.matches(recipe))
            .cloned()
            .collect())
    }

    async fn find_ingredient_quantities(
        &mut self,
        recipe_ids: &[i64],
    ) -> anyhow::Result<Vec<IngredientQuantity>> {
        let mut rows = self
            .quantities
            .iter()
            .filter(|row| recipe_ids.contains(&row.recipe_id))
            .cloned()
            .collect::<Vec<_>>();
        rows.sort_by_key(|row| (row.recipe_id, row.ingredient_id));

        Ok(rows)
    }

    async fn find_ingredient_names(
        &mut self,
        ingredient_ids: &[i64],
    ) -> anyhow::Result<HashMap<i64, String>> {
        Ok(self
            .names
            .iter()
            .filter(|(id, _)| ingredient_ids.contains(id))
            .map(|(id, name)| (*id, name.to_owned()))
            .collect())
    }
}

#[async_trait::async_trait]
impl PlanSink for MemoryStore {
    async fn save_plan(&mut self, entries: &[PlanEntry]) -> anyhow::Result<()> {
        if self.fail_saves {
            anyhow::bail!("database is locked");
        }

        self.saved.retain(|saved| {
            !entries
                .iter()
                .any(|entry| entry.user_id == saved.user_id && entry.date == saved.date)
        });
        self.saved.extend_from_slice(entries);

        Ok(())
    }
}
