use macroplan_db::table::MealPlanEntry;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{Connection, prelude::FromRow};

/// One stored dish of a user's day.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub user_id: String,
    pub date: String,
    pub meal_label: String,
    pub recipe_id: i64,
    pub servings: i64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Write side of plan storage. Saving replaces every stored entry of the
/// (user, date) pairs found in `entries`.
#[async_trait::async_trait]
pub trait PlanSink: Send {
    async fn save_plan(&mut self, entries: &[PlanEntry]) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl PlanSink for sqlx::SqliteConnection {
    async fn save_plan(&mut self, entries: &[PlanEntry]) -> anyhow::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut days = entries
            .iter()
            .map(|entry| (entry.user_id.as_str(), entry.date.as_str()))
            .collect::<Vec<_>>();
        days.sort_unstable();
        days.dedup();

        let mut tx = self.begin().await?;

        for (user_id, date) in days {
            let (sql, values) = Query::delete()
                .from_table(MealPlanEntry::Table)
                .and_where(Expr::col(MealPlanEntry::UserId).eq(user_id))
                .and_where(Expr::col(MealPlanEntry::Date).eq(date))
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let mut statement = Query::insert()
            .into_table(MealPlanEntry::Table)
            .columns([
                MealPlanEntry::UserId,
                MealPlanEntry::Date,
                MealPlanEntry::MealLabel,
                MealPlanEntry::RecipeId,
                MealPlanEntry::Servings,
                MealPlanEntry::Calories,
                MealPlanEntry::Protein,
                MealPlanEntry::Fat,
                MealPlanEntry::Carbs,
            ])
            .on_conflict(
                OnConflict::columns([
                    MealPlanEntry::UserId,
                    MealPlanEntry::Date,
                    MealPlanEntry::MealLabel,
                    MealPlanEntry::RecipeId,
                ])
                .update_columns([
                    MealPlanEntry::Servings,
                    MealPlanEntry::Calories,
                    MealPlanEntry::Protein,
                    MealPlanEntry::Fat,
                    MealPlanEntry::Carbs,
                ])
                .to_owned(),
            )
            .to_owned();

        for entry in entries {
            statement.values([
                entry.user_id.to_owned().into(),
                entry.date.to_owned().into(),
                entry.meal_label.to_owned().into(),
                entry.recipe_id.into(),
                entry.servings.into(),
                entry.calories.into(),
                entry.protein.into(),
                entry.fat.into(),
                entry.carbs.into(),
            ])?;
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }
}
