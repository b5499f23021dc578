use std::collections::HashMap;

use macroplan_db::table;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{CandidateQuery, IngredientQuantity, Recipe};

/// Read access to the recipe store.
///
/// Implemented directly on [`sqlx::SqliteConnection`] so a caller holding a
/// pooled connection for the duration of a request can pass it as is.
#[async_trait::async_trait]
pub trait RecipeRepository: Send {
    /// Recipes whose diet is in `query.diets` and whose prep and cook time
    /// are each within the query bounds, ordered by id.
    async fn find_candidates(&mut self, query: &CandidateQuery) -> anyhow::Result<Vec<Recipe>>;

    async fn find_ingredient_quantities(
        &mut self,
        recipe_ids: &[i64],
    ) -> anyhow::Result<Vec<IngredientQuantity>>;

    /// Display names keyed by ingredient id. Unknown ids are simply absent.
    async fn find_ingredient_names(
        &mut self,
        ingredient_ids: &[i64],
    ) -> anyhow::Result<HashMap<i64, String>>;
}

#[async_trait::async_trait]
impl RecipeRepository for sqlx::SqliteConnection {
    async fn find_candidates(&mut self, query: &CandidateQuery) -> anyhow::Result<Vec<Recipe>> {
        if query.diets.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns([
                table::Recipe::Id,
                table::Recipe::Name,
                table::Recipe::Calories,
                table::Recipe::Protein,
                table::Recipe::Fat,
                table::Recipe::Carbs,
                table::Recipe::PrepTime,
                table::Recipe::CookTime,
                table::Recipe::Servings,
                table::Recipe::Diet,
                table::Recipe::Image,
                table::Recipe::HealthScore,
                table::Recipe::Cost,
                table::Recipe::Allergies,
            ])
            .from(table::Recipe::Table)
            .and_where(
                Expr::col(table::Recipe::Diet)
                    .is_in(query.diets.iter().map(|diet| diet.to_string())),
            )
            .and_where(Expr::col(table::Recipe::PrepTime).lte(query.max_prep_time))
            .and_where(Expr::col(table::Recipe::CookTime).lte(query.max_cook_time))
            .order_by(table::Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_all(&mut *self)
            .await?)
    }

    async fn find_ingredient_quantities(
        &mut self,
        recipe_ids: &[i64],
    ) -> anyhow::Result<Vec<IngredientQuantity>> {
        if recipe_ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns([
                table::RecipeIngredient::RecipeId,
                table::RecipeIngredient::IngredientId,
                table::RecipeIngredient::Quantity,
                table::RecipeIngredient::Unit,
            ])
            .from(table::RecipeIngredient::Table)
            .and_where(
                Expr::col(table::RecipeIngredient::RecipeId).is_in(recipe_ids.iter().copied()),
            )
            .order_by(table::RecipeIngredient::RecipeId, Order::Asc)
            .order_by(table::RecipeIngredient::IngredientId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(
            sqlx::query_as_with::<_, IngredientQuantity, _>(&sql, values)
                .fetch_all(&mut *self)
                .await?,
        )
    }

    async fn find_ingredient_names(
        &mut self,
        ingredient_ids: &[i64],
    ) -> anyhow::Result<HashMap<i64, String>> {
        if ingredient_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let statement = Query::select()
            .columns([table::Ingredient::Id, table::Ingredient::Name])
            .from(table::Ingredient::Table)
            .and_where(Expr::col(table::Ingredient::Id).is_in(ingredient_ids.iter().copied()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, (i64, String), _>(&sql, values)
            .fetch_all(&mut *self)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
