#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use macroplan::{
    AppState, Config,
    config::{DatabaseConfig, ObservabilityConfig, ServerConfig},
};
use macroplan_mealplan::PlannerSettings;
use tower::ServiceExt;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<AppState> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    macroplan::db::migrate(&url).await?;
    let pool = macroplan::db::create_pool(&url, 2).await?;

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        observability: ObservabilityConfig::default(),
        planner: PlannerSettings::default(),
    };

    Ok(AppState::new(config, pool))
}

pub async fn insert_recipe(
    state: &AppState,
    name: &str,
    diet: &str,
    calories: f64,
    time: i64,
) -> anyhow::Result<i64> {
    let id = sqlx::query(
        "INSERT INTO recipe (name, diet, calories, protein, fat, carbs, prep_time, cook_time, servings, image) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
    )
    .bind(name)
    .bind(diet)
    .bind(calories)
    .bind(calories / 20.0)
    .bind(calories / 30.0)
    .bind(calories / 15.0)
    .bind(time)
    .bind(time)
    .bind(format!("https://img.example/{name}.jpg"))
    .execute(&state.pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn insert_ingredient(
    state: &AppState,
    recipe_id: i64,
    ingredient_id: i64,
    name: &str,
    quantity: f64,
    unit: &str,
) -> anyhow::Result<()> {
    sqlx::query("INSERT OR IGNORE INTO ingredient (id, name) VALUES (?, ?)")
        .bind(ingredient_id)
        .bind(name)
        .execute(&state.pool)
        .await?;
    sqlx::query(
        "INSERT INTO recipe_ingredient (recipe_id, ingredient_id, quantity, unit) VALUES (?, ?, ?, ?)",
    )
    .bind(recipe_id)
    .bind(ingredient_id)
    .bind(quantity)
    .bind(unit)
    .execute(&state.pool)
    .await?;

    Ok(())
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: impl Into<String>,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.into()))?,
        )
        .await?;

    read_json(response).await
}

pub async fn get_json(app: Router, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;

    read_json(response).await
}

async fn read_json(
    response: axum::response::Response,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, serde_json::from_slice(&bytes)?))
}
