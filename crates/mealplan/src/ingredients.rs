use std::collections::{BTreeMap, HashMap, HashSet};

use macroplan_recipe::RecipeRepository;
use serde::Serialize;

use crate::ScaledMeal;

pub const UNKNOWN_INGREDIENT: &str = "Unknown ingredient";

/// An ingredient of one planned dish, already multiplied by its servings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    pub ingredient_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
}

/// Ingredient needs summed across the whole day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingLine {
    pub ingredient_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub recipe_ids: Vec<i64>,
}

/// Looks up the ingredient lines of every meal and scales them by the
/// meal's servings. Result is keyed by recipe id.
pub async fn collect_ingredients<S: RecipeRepository + ?Sized>(
    store: &mut S,
    meals: &[&ScaledMeal],
) -> anyhow::Result<HashMap<i64, Vec<IngredientLine>>> {
    let servings = meals
        .iter()
        .map(|meal| (meal.candidate.id, f64::from(meal.servings)))
        .collect::<HashMap<_, _>>();
    let recipe_ids = servings.keys().copied().collect::<Vec<_>>();

    let quantities = store.find_ingredient_quantities(&recipe_ids).await?;

    let ingredient_ids = quantities
        .iter()
        .map(|row| row.ingredient_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let names = store.find_ingredient_names(&ingredient_ids).await?;

    let mut lines: HashMap<i64, Vec<IngredientLine>> = HashMap::new();
    for row in quantities {
        let name = match names.get(&row.ingredient_id) {
            Some(name) => name.to_owned(),
            None => {
                tracing::warn!(
                    ingredient_id = row.ingredient_id,
                    recipe_id = row.recipe_id,
                    "ingredient name not found"
                );
                UNKNOWN_INGREDIENT.to_owned()
            }
        };
        let factor = servings.get(&row.recipe_id).copied().unwrap_or(1.0);

        lines.entry(row.recipe_id).or_default().push(IngredientLine {
            ingredient_id: row.ingredient_id,
            name,
            unit: row.unit,
            quantity: row.quantity * factor,
        });
    }

    Ok(lines)
}

/// Sums lines sharing an ingredient and unit. Units are compared trimmed and
/// lower-cased; different units of the same ingredient stay separate.
pub fn shopping_list<'a>(
    lines: impl IntoIterator<Item = (i64, &'a IngredientLine)>,
) -> Vec<ShoppingLine> {
    let mut grouped: BTreeMap<(i64, String), ShoppingLine> = BTreeMap::new();

    for (recipe_id, line) in lines {
        let unit = line.unit.trim().to_lowercase();
        let entry = grouped
            .entry((line.ingredient_id, unit.to_owned()))
            .or_insert_with(|| ShoppingLine {
                ingredient_id: line.ingredient_id,
                name: line.name.to_owned(),
                unit,
                quantity: 0.0,
                recipe_ids: vec![],
            });

        entry.quantity += line.quantity;
        if !entry.recipe_ids.contains(&recipe_id) {
            entry.recipe_ids.push(recipe_id);
        }
    }

    let mut list = grouped.into_values().collect::<Vec<_>>();
    list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));

    list
}
