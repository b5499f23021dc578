mod ingredient;
mod meal_plan_entry;
mod recipe;
mod recipe_ingredient;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "macroplan",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        ingredient::CreateTable,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        meal_plan_entry::CreateTable
    ]
);
