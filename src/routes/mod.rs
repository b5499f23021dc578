use axum::{
    Router,
    routing::{get, post},
};
use macroplan_mealplan::Planner;
use sqlx::SqlitePool;

mod health;
mod meal_plan;

pub use meal_plan::{ApiError, DayPlanResponse, ErrorResponse};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub planner: Planner,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, pool: SqlitePool) -> Self {
        let planner = Planner::new(config.planner.clone());

        Self {
            config,
            planner,
            pool,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/data", post(meal_plan::generate))
        .route("/api/plans/{user_id}/{date}", get(meal_plan::day))
        .with_state(app_state)
}
