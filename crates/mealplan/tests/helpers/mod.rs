use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    macroplan_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub struct Seed<'a> {
    pub name: &'a str,
    pub diet: &'a str,
    pub calories: Option<f64>,
    pub prep_time: i64,
    pub cook_time: i64,
}

impl<'a> Seed<'a> {
    pub fn new(name: &'a str, diet: &'a str, calories: f64) -> Self {
        Self {
            name,
            diet,
            calories: Some(calories),
            prep_time: 5,
            cook_time: 5,
        }
    }
}

pub async fn insert_recipes(pool: &SqlitePool, seeds: &[Seed<'_>]) -> anyhow::Result<Vec<i64>> {
    let mut ids = vec![];
    for seed in seeds {
        let calories = seed.calories.unwrap_or_default();
        let id = sqlx::query(
            "INSERT INTO recipe (name, diet, calories, protein, fat, carbs, prep_time, cook_time, servings) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 2)",
        )
        .bind(seed.name)
        .bind(seed.diet)
        .bind(seed.calories)
        .bind(calories / 20.0)
        .bind(calories / 30.0)
        .bind(calories / 15.0)
        .bind(seed.prep_time)
        .bind(seed.cook_time)
        .execute(pool)
        .await?
        .last_insert_rowid();
        ids.push(id);
    }

    Ok(ids)
}

#[allow(dead_code)]
pub async fn insert_ingredient(
    pool: &SqlitePool,
    recipe_id: i64,
    ingredient: (i64, Option<&str>),
    quantity: f64,
    unit: &str,
) -> anyhow::Result<()> {
    let (ingredient_id, name) = ingredient;
    if let Some(name) = name {
        sqlx::query("INSERT OR IGNORE INTO ingredient (id, name) VALUES (?, ?)")
            .bind(ingredient_id)
            .bind(name)
            .execute(pool)
            .await?;
    }

    sqlx::query(
        "INSERT INTO recipe_ingredient (recipe_id, ingredient_id, quantity, unit) VALUES (?, ?, ?, ?)",
    )
    .bind(recipe_id)
    .bind(ingredient_id)
    .bind(quantity)
    .bind(unit)
    .execute(pool)
    .await?;

    Ok(())
}
