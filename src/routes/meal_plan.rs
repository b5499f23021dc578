use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use macroplan_mealplan::{GenerateError, GenerateInput, MealPlan, PlanEntry, Query};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::routes::AppState;

/// Error body shared by every API failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlanResponse {
    pub user_id: String,
    pub date: String,
    pub entries: Vec<PlanEntry>,
}

/// POST /api/data
///
/// Generates one day of meals for the requested diet, calorie goal, time
/// budget and meal count. The plan is stored when the body carries a user id,
/// replacing any plan already stored for that day. `time` is whole minutes.
///
/// # Returns
/// - 200 OK: the plan with per-meal ingredients and a shopping list
/// - 400 Bad Request: malformed or out of range input
/// - 422 Unprocessable Entity: too few recipes, or calorie goals not met
/// - 500 Internal Server Error: store failure
#[tracing::instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateInput>, JsonRejection>,
) -> Result<Json<MealPlan>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    tracing::info!(
        user_id = ?input.user_id,
        diet = ?input.diet,
        calories = input.calories,
        time = input.time,
        meal_count = input.meal_count.events(),
        "Meal plan generation requested"
    );

    let mut conn = state
        .pool
        .acquire()
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Failed to acquire connection: {e}")))?;
    let mut rng = StdRng::from_os_rng();

    let plan = state.planner.generate(&mut *conn, &input, &mut rng).await?;

    Ok(Json(plan))
}

/// GET /api/plans/{user_id}/{date}
#[tracing::instrument(skip(state))]
pub async fn day(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(String, String)>,
) -> Result<Json<DayPlanResponse>, ApiError> {
    if Date::parse(&date, format_description!("[year]-[month]-[day]")).is_err() {
        return Err(ApiError::BadRequest(format!(
            "Invalid date '{date}', expected YYYY-MM-DD"
        )));
    }

    let entries = Query(state.pool.clone())
        .find_day(&user_id, &date)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Failed to load plan: {e}")))?;

    Ok(Json(DayPlanResponse {
        user_id,
        date,
        entries,
    }))
}

/// API error types with JSON responses
#[derive(Debug)]
pub enum ApiError {
    InsufficientCandidates { found: usize, required: usize },
    ConstraintUnsatisfiable { attempts: u32 },
    BadRequest(String),
    InternalServerError(String),
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::Invalid(errors) => ApiError::BadRequest(errors.to_string()),
            GenerateError::InsufficientCandidates { found, required } => {
                ApiError::InsufficientCandidates { found, required }
            }
            GenerateError::ConstraintUnsatisfiable { attempts } => {
                ApiError::ConstraintUnsatisfiable { attempts }
            }
            GenerateError::Store(e) => ApiError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::InsufficientCandidates { found, required } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "InsufficientCandidates".to_string(),
                    message: format!(
                        "Not enough recipes match this diet and time limit: found {found}, need at least {required}."
                    ),
                    details: Some(serde_json::json!({
                        "found": found,
                        "required": required,
                    })),
                },
            ),
            ApiError::ConstraintUnsatisfiable { attempts } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "ConstraintUnsatisfiable".to_string(),
                    message: "meal groups don't meet calorie goals after retries".to_string(),
                    details: Some(serde_json::json!({ "attempts": attempts })),
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "BadRequest".to_string(),
                    message: msg,
                    details: None,
                },
            ),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "InternalServerError".to_string(),
                        message: "Something went wrong. Please try again later.".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_generate_errors_map_to_status() {
        let (status, json) = body(
            GenerateError::InsufficientCandidates {
                found: 2,
                required: 4,
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "InsufficientCandidates");
        assert_eq!(json["details"]["found"], 2);
        assert_eq!(json["details"]["required"], 4);

        let (status, json) =
            body(GenerateError::ConstraintUnsatisfiable { attempts: 7 }.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["message"],
            "meal groups don't meet calorie goals after retries"
        );
        assert_eq!(json["details"]["attempts"], 7);
    }

    #[tokio::test]
    async fn test_store_failure_hides_cause() {
        let (status, json) =
            body(GenerateError::Store(anyhow::anyhow!("disk I/O error")).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "InternalServerError");
        assert!(!json["message"].as_str().unwrap().contains("disk"));
        assert!(json.get("details").is_none());
    }
}
