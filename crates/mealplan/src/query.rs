use macroplan_db::table::MealPlanEntry;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{MealLabel, PlanEntry};

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Stored entries of one user's day, breakfast first, then by recipe id.
    pub async fn find_day(&self, user_id: &str, date: &str) -> anyhow::Result<Vec<PlanEntry>> {
        let statement = sea_query::Query::select()
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
            .from(MealPlanEntry::Table)
            .and_where(Expr::col(MealPlanEntry::UserId).eq(user_id))
            .and_where(Expr::col(MealPlanEntry::Date).eq(date))
            .order_by(MealPlanEntry::RecipeId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let mut entries = sqlx::query_as_with::<_, PlanEntry, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        entries.sort_by_key(|entry| {
            (
                entry.meal_label.parse::<MealLabel>().ok(),
                entry.recipe_id,
            )
        });

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanSink;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx_migrator::migrator::{Migrate, Plan};

    fn entry(user_id: &str, date: &str, label: MealLabel, recipe_id: i64) -> PlanEntry {
        PlanEntry {
            user_id: user_id.to_owned(),
            date: date.to_owned(),
            meal_label: label.key(),
            recipe_id,
            servings: 1,
            calories: 500.0,
            protein: 30.0,
            fat: 20.0,
            carbs: 40.0,
        }
    }

    #[tokio::test]
    async fn test_find_day_orders_by_meal() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        {
            let mut conn = pool.acquire().await.unwrap();
            macroplan_db::migrator()
                .unwrap()
                .run(&mut conn, &Plan::apply_all())
                .await
                .unwrap();
            conn.save_plan(&[
                entry("u1", "2026-03-02", MealLabel::Dinner, 1),
                entry("u1", "2026-03-02", MealLabel::Breakfast, 9),
                entry("u1", "2026-03-02", MealLabel::Lunch, 4),
                entry("u1", "2026-03-02", MealLabel::Breakfast, 3),
                entry("u1", "2026-03-03", MealLabel::Lunch, 5),
                entry("u2", "2026-03-02", MealLabel::Lunch, 6),
            ])
            .await
            .unwrap();
        }

        let entries = Query(pool).find_day("u1", "2026-03-02").await.unwrap();

        assert_eq!(
            entries
                .iter()
                .map(|e| (e.meal_label.as_str(), e.recipe_id))
                .collect::<Vec<_>>(),
            vec![("breakfast", 3), ("breakfast", 9), ("lunch", 4), ("dinner", 1)]
        );
    }
}
